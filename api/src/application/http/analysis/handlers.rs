pub mod analyze_product;
