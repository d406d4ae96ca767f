//! Fixed instructions for each pipeline stage.

use super::entities::PromptTemplate;

pub const PRODUCT_INFO: &str = "product_info";
pub const SEARCH_RESULTS: &str = "search_results";
pub const INTERNAL_REPORT: &str = "internal_report";
pub const SEARCH_FINDINGS: &str = "search_findings";

pub const NUTRITIONIST_PERSONA: &str = "You are an expert dietitian and nutritionist. Provide clear, \
evidence-based guidance on what foods and nutrients to consume for overall health, recommended \
portions, and which foods or ingredients are harmful or should be avoided. Prioritize safety, note \
common contraindications and allergies, and advise when to consult a healthcare professional. Be \
concise and practical.";

pub const VISION_INSTRUCTION: &str = "Analyze the provided image of a product and return the \
following information in a structured manner with clear labels without bold or italics. The \
information to extract includes:
1. Product Name: The primary name of the product.
2. Product Type: The category of the product (e.g., Food, Cosmetic, Cleaning Supply).
3. Extracted Information: All ingredients and chemicals, and warnings and certifications.
4. Brand: The brand name of the product.
Provide the response in a clear and concise format. If any information is not available, indicate \
it as \"Not Available\". Do not include any additional commentary or explanations.";

/// Labels the report prompt asks for, in order.
pub const REPORT_SECTION_LABELS: [&str; 8] = [
    "Product Summary",
    "Pros",
    "Cons",
    "Nutritional & Safety Considerations",
    "Who Should Limit/Avoid",
    "Recommended Serving/Frequency",
    "Regulatory Status",
    "Healthier Alternatives or Tips",
];

/// Jurisdictions covered by regulatory status and advisory searches.
pub const JURISDICTIONS: [&str; 5] = ["India", "EU", "USA", "Canada", "Australia"];

pub const REPORT: PromptTemplate = PromptTemplate::new(
    "report",
    "Analyze the product below and return a concise, structured report with clear labels (no bold \
or italics).
Use the following product information as the source:
{product_info}

Include:
- Product Summary: one-line description.
- Pros: short bullet list of benefits.
- Cons: short bullet list of risks/harmful aspects.
- Nutritional & Safety Considerations: key points (fat, sodium, sugar, allergens, additives) and any \
special cautions.
- Who Should Limit/Avoid: specific populations.
- Recommended Serving/Frequency: practical guidance.
- Regulatory Status: allowed/banned status for product and key additives in India, EU, USA, Canada, \
Australia (or \"Not Available\" if unknown).
- Healthier Alternatives or Tips: brief suggestions.

Do not add extra commentary; be concise, small and user-focused.",
    &[PRODUCT_INFO],
);

pub const SEARCH_PLAN: PromptTemplate = PromptTemplate::new(
    "search_plan",
    "You have access to the duckduckgo_search tool. Using the product information below, perform \
searches for the latest news, health advisories, recalls, or bans related to:
- the Product Name,
- the Brand,
- each chemical/additive listed (include both common names and numeric codes like \"160c\", \
\"627\", etc.).

Product information:
{product_info}

For each target (product/brand/chemical) run country-specific queries for: India, EU, USA, Canada, \
Australia (include the country name in the query). Prioritize results from the past 1 year; if \
none, expand to the past 5 years.

For each relevant result return (concise, structured):
- Target: (product/brand/chemical)
- Country:
- Type: (Health advisory / Ban / Recall / News)
- Date:
- Source URL:
- 1-line summary.
- DuckDuckGo Query Used:

If no relevant results are found for a given target/country, return: \"No recent advisories found\".

Be concise and only return the structured findings. Do not add extra commentary.",
    &[PRODUCT_INFO],
);

pub const SEARCH_SUMMARY: PromptTemplate = PromptTemplate::new(
    "search_summary",
    "Summarize the raw web search results below into structured findings. For each relevant result \
give Target, Country, Type (Health advisory / Ban / Recall / News), Date, Source URL, a 1-line \
summary and the query used. If no relevant results are found for a given target/country, return: \
\"No recent advisories found\". Do not add extra commentary.

Search results:
{search_results}",
    &[SEARCH_RESULTS],
);

pub const FINAL_REPORT: PromptTemplate = PromptTemplate::new(
    "final_report",
    "Based on the internal analysis and external search results below, create a single, \
well-structured, small, and easy-to-read report for a consumer.

Use Markdown for formatting. Use headings (`###`), bold text (`**word**`), and bullet points \
(`- point`).

**Internal Analysis:**
{internal_report}

**External Search Results:**
{search_findings}

---

Compile all this information into a single, final report below.",
    &[INTERNAL_REPORT, SEARCH_FINDINGS],
);
