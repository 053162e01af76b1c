//! Image-generation client port definition.

use crate::domain::AppError;

/// Request to generate images from a composed prompt.
#[derive(Debug, Clone)]
pub struct ImageRequest {
    /// The composed prompt text, forwarded as-is.
    pub prompt: String,
    /// Number of images to generate.
    pub count: u32,
    /// Requested resolution, e.g. "512x512".
    pub size: String,
}

/// Reference to a generated image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// URL of the generated image.
    pub url: String,
}

/// Port for image-generation operations.
pub trait ImageClient {
    /// Generate images for the request, returning the first image reference.
    fn generate(&self, request: ImageRequest) -> Result<ImageRef, AppError>;
}

/// Mock client for offline use and testing without API calls.
#[derive(Debug, Clone, Default)]
pub struct MockImageClient;

impl ImageClient for MockImageClient {
    fn generate(&self, request: ImageRequest) -> Result<ImageRef, AppError> {
        println!("=== MOCK MODE ===");
        println!("Would request image generation with:");
        println!("  Count: {}", request.count);
        println!("  Size: {}", request.size);
        println!("  Prompt length: {} chars", request.prompt.len());

        Ok(ImageRef { url: format!("mock://image-{}", chrono::Utc::now().timestamp()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_client_returns_mock_reference() {
        let client = MockImageClient;
        let result = client
            .generate(ImageRequest {
                prompt: "test prompt".to_string(),
                count: 1,
                size: "512x512".to_string(),
            })
            .unwrap();
        assert!(result.url.starts_with("mock://image-"));
    }
}
