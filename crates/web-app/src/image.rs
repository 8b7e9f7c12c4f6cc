use base64::Engine;

/// External image-generation collaborator. Failures of any kind are
/// treated as "no image" and never propagated.
#[allow(async_fn_in_trait)]
pub trait ImageGenerator {
    async fn generate_image(&self, exercise_name: &str) -> Option<ExerciseImage>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseImage {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl ExerciseImage {
    /// Data URL for direct use as an image source.
    #[must_use]
    pub fn data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type,
            base64::engine::general_purpose::STANDARD.encode(&self.data)
        )
    }
}

/// Loading state of one exercise's illustration. Slots are independent and
/// unordered; a failed slot never affects the others.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum ImageSlot {
    #[default]
    Pending,
    Ready(ExerciseImage),
    Unavailable,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_data_url() {
        let image = ExerciseImage {
            mime_type: String::from("image/png"),
            data: vec![1, 2, 3],
        };
        assert_eq!(image.data_url(), "data:image/png;base64,AQID");
    }
}
