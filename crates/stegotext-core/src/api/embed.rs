use crate::api::shared::Password;
use crate::{StegoCodec, StegoError};

pub fn prepare() -> EmbedApi {
    EmbedApi::default()
}

/// Fluent builder around [`StegoCodec::embed`].
#[derive(Default, Debug)]
pub struct EmbedApi {
    image: Option<Vec<u8>>,
    message: Option<String>,
    password: Password,
    fallback_password: Password,
}

impl EmbedApi {
    pub fn with_image_data(mut self, image: Vec<u8>) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    /// Set the password
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    /// Set the password
    /// If `None` is passed, the fallback secret encrypts the message instead
    pub fn use_password<S: AsRef<str>>(mut self, password: Option<S>) -> Self {
        self.password = password.map(|s| s.as_ref().to_string()).into();
        self
    }

    /// Set the process-configured secret used when no password is given
    pub fn with_fallback_password(mut self, secret: &str) -> Self {
        self.fallback_password = secret.into();
        self
    }

    pub fn execute(self) -> Result<Vec<u8>, StegoError> {
        let Some(image) = self.image else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(message) = self.message else {
            return Err(StegoError::MissingMessage);
        };

        let codec = match self.fallback_password.as_deref() {
            Some(secret) => StegoCodec::with_fallback_password(secret),
            None => StegoCodec::new(),
        };

        codec.embed(&image, &message, self.password.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carrier::CoverImage;
    use crate::test_utils::prepare_growing_colors_image;

    #[test]
    fn illustrate_api_usage() {
        let carrier = CoverImage::from_raster(prepare_growing_colors_image(64, 64))
            .to_png_bytes()
            .unwrap();

        crate::api::embed::prepare()
            .with_image_data(carrier)
            .with_message("Hello, World!")
            .with_password("SuperSecret42")
            .execute()
            .expect("Failed to hide message in image");
    }

    #[test]
    fn carrier_must_be_set() {
        let result = prepare().with_message("Hello, World!").execute();

        assert!(matches!(result, Err(StegoError::CarrierNotSet)));
    }

    #[test]
    fn message_must_be_set() {
        let result = prepare().with_image_data(vec![0u8; 16]).execute();

        assert!(matches!(result, Err(StegoError::MissingMessage)));
    }

    #[test]
    fn without_password_and_fallback_there_is_nothing_to_encrypt_with() {
        let carrier = CoverImage::from_raster(prepare_growing_colors_image(64, 64))
            .to_png_bytes()
            .unwrap();

        let result = prepare()
            .with_image_data(carrier)
            .with_message("Hello, World!")
            .execute();

        assert!(matches!(result, Err(StegoError::MissingPassword)));
    }
}
