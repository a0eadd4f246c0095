use crate::api::shared::Password;
use crate::{StegoCodec, StegoError};

pub fn prepare() -> ExtractApi {
    ExtractApi::default()
}

/// Fluent builder around [`StegoCodec::extract`].
#[derive(Default, Debug)]
pub struct ExtractApi {
    image: Option<Vec<u8>>,
    password: Password,
    fallback_password: Password,
}

impl ExtractApi {
    pub fn with_image_data(mut self, image: Vec<u8>) -> Self {
        self.image = Some(image);
        self
    }

    /// Set the password
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    /// Set the password
    pub fn use_password<S: AsRef<str>>(mut self, password: Option<S>) -> Self {
        self.password = password.map(|s| s.as_ref().to_string()).into();
        self
    }

    /// Set the process-configured secret for payloads embedded without an
    /// explicit password
    pub fn with_fallback_password(mut self, secret: &str) -> Self {
        self.fallback_password = secret.into();
        self
    }

    /// Runs the extraction. `Ok(None)` means the input was not a decodable
    /// image, see [`StegoCodec::extract`] for that asymmetry.
    pub fn execute(self) -> Result<Option<String>, StegoError> {
        let Some(image) = self.image else {
            return Err(StegoError::CarrierNotSet);
        };

        let codec = match self.fallback_password.as_deref() {
            Some(secret) => StegoCodec::with_fallback_password(secret),
            None => StegoCodec::new(),
        };

        codec.extract(&image, self.password.as_deref())
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
        let stego = crate::api::embed::prepare()
            .with_image_data(carrier)
            .with_message("Hello, World!")
            .with_password("SuperSecret42")
            .execute()
            .unwrap();

        let message = crate::api::extract::prepare()
            .with_image_data(stego)
            .with_password("SuperSecret42")
            .execute()
            .expect("Failed to unveil message from image");

        assert_eq!(message.as_deref(), Some("Hello, World!"));
    }

    #[test]
    fn carrier_must_be_set() {
        let result = prepare().with_password("irrelevant").execute();

        assert!(matches!(result, Err(StegoError::CarrierNotSet)));
    }
}
