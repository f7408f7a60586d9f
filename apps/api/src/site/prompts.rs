// Prompt constants for site record extraction.

/// System prompt for turning a practice description into a site record.
/// `llm_client::prompts::JSON_ONLY_INSTRUCTION` is appended before sending.
pub const EXTRACTION_SYSTEM: &str = r#"You are an assistant that builds marketing websites for medical professionals.
Read the user's description of a doctor's practice and extract the website content.

Return a JSON object with this EXACT shape (no extra fields):
{
  "websiteNiche": "string - the medical field or niche of the practice",
  "doctorDetails": {
    "name": "string - the doctor's full name",
    "specialization": ["string"],
    "achievements": ["string"],
    "description": "string - a short professional bio"
  },
  "pageLinks": ["about-us", "services", "contact"],
  "images": ["https://... image URL for the hero and about sections"],
  "testimonialImages": ["https://... up to 3 image URLs"],
  "faqs": [
    {"question": "string", "answer": "string"}
  ]
}

Rules:
- "websiteNiche" and "doctorDetails.name" are required.
- "pageLinks" are lowercase slugs, words joined with hyphens.
- Use empty arrays or an empty string for anything the description does not mention.
- Only include image URLs that appear in the description.
- No extra text."#;
