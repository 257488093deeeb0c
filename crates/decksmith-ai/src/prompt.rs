//! Prompt templates for the three generation tasks.

/// Ask the model for a full presentation outline as a JSON array of slide
/// descriptors.
pub fn outline(topic: &str) -> String {
    format!(
        "Create a presentation outline about \"{topic}\" with the following format for each slide:\n\
- Title: The slide's title\n\
- Content: The main content\n\
- Layout: One of: title, content, twoColumn, image\n\
- ImagePrompt: A description of an image that would work well (if applicable)\n\n\
Format the response as a JSON array of slides. Example:\n\
[\n\
  {{\n\
    \"title\": \"Introduction\",\n\
    \"content\": \"Overview of the topic\",\n\
    \"layout\": \"title\"\n\
  }}\n\
]"
    )
}

/// Ask the model to rewrite existing slide content.
pub fn enhance(content: &str) -> String {
    format!(
        "Improve the following slide content with more engaging language and better structure:\n\
{content}\n\n\
Keep the response focused and concise."
    )
}

/// Ask the model for a single image-search keyword.
pub fn image_keyword(content: &str) -> String {
    format!(
        "Based on this slide content:\n\
{content}\n\n\
Suggest a specific keyword for finding a relevant image on Unsplash. \
Response should be a single word or short phrase."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_embed_their_inputs() {
        assert!(outline("Climate Change").contains("\"Climate Change\""));
        assert!(outline("x").contains("JSON array"));
        assert!(enhance("some body text").contains("some body text"));
        assert!(image_keyword("rockets").contains("rockets"));
    }
}
