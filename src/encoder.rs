//! The encoder boundary.
//!
//! Prompt text leaves this crate as two conditioning artifacts produced by
//! an external tokenization/encoding service. The service is opaque: this
//! module only pins down the contract the composer relies on and the order
//! of operations around it. No real encoder ships here; hosts implement
//! [`TextEncoder`] over their model handle.

use crate::compose::ComposedPrompt;
use crate::error::{Result, ShotwrightError};
use crate::shot::ShotRequest;

/// Opaque prompt-encoding service.
///
/// Implementations wrap a conditioning-model handle. Both output types are
/// opaque to this crate; they only flow back to the caller.
pub trait TextEncoder {
    /// Token sequence produced from prompt text.
    type Tokens;

    /// Numeric conditioning artifact produced from a token sequence.
    type Conditioning;

    /// Convert prompt text into the encoder's token sequence.
    fn tokenize(&self, text: &str) -> Self::Tokens;

    /// Encode a token sequence into a conditioning artifact.
    fn encode_scheduled(&self, tokens: Self::Tokens) -> Self::Conditioning;

    /// A copy of this encoder that skips the last `layers` layers.
    ///
    /// Only called with `layers >= 1`; skip depth 0 uses the encoder
    /// unmodified and never reaches this method.
    fn with_layer_skip(&self, layers: u32) -> Self
    where
        Self: Sized;
}

/// The two conditioning artifacts of one encoded shot.
#[derive(Debug)]
pub struct EncodedShot<C> {
    pub positive: C,
    pub negative: C,
}

/// Resolve, compose, and encode one shot request.
///
/// Fails with [`ShotwrightError::MissingEncoder`] when `encoder` is
/// `None`, before any composition work. When `request.clip_skip` is
/// greater than zero a layer-skipping copy of the encoder is derived
/// first. The negative prompt is always encoded, even when empty, so the
/// caller receives exactly two artifacts.
pub fn encode_shot<E: TextEncoder>(
    encoder: Option<&E>,
    request: &ShotRequest,
) -> Result<EncodedShot<E::Conditioning>> {
    let Some(encoder) = encoder else {
        return Err(ShotwrightError::MissingEncoder);
    };

    let prompt = request.compose();

    if request.clip_skip > 0 {
        let skipped = encoder.with_layer_skip(request.clip_skip);
        return Ok(encode_pair(&skipped, &prompt));
    }

    Ok(encode_pair(encoder, &prompt))
}

fn encode_pair<E: TextEncoder>(
    encoder: &E,
    prompt: &ComposedPrompt,
) -> EncodedShot<E::Conditioning> {
    let positive = encoder.encode_scheduled(encoder.tokenize(&prompt.positive));
    let negative = encoder.encode_scheduled(encoder.tokenize(&prompt.negative));
    EncodedShot { positive, negative }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::negative::NegativeStrength;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every call and stamps artifacts with the active skip depth.
    struct FakeEncoder {
        layer_skip: u32,
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl FakeEncoder {
        fn new() -> Self {
            Self {
                layer_skip: 0,
                calls: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl TextEncoder for FakeEncoder {
        type Tokens = String;
        type Conditioning = String;

        fn tokenize(&self, text: &str) -> String {
            self.calls.borrow_mut().push(format!("tokenize:{}", text));
            text.to_string()
        }

        fn encode_scheduled(&self, tokens: String) -> String {
            self.calls.borrow_mut().push("encode".to_string());
            format!("{}|skip={}", tokens, self.layer_skip)
        }

        fn with_layer_skip(&self, layers: u32) -> Self {
            self.calls
                .borrow_mut()
                .push(format!("with_layer_skip:{}", layers));
            Self {
                layer_skip: layers,
                calls: Rc::clone(&self.calls),
            }
        }
    }

    fn request(base: &str, strength: NegativeStrength) -> ShotRequest {
        ShotRequest {
            base: base.to_string(),
            negative_strength: strength,
            ..ShotRequest::default()
        }
    }

    #[test]
    fn test_missing_encoder_fails_before_composing() {
        let result = encode_shot::<FakeEncoder>(None, &ShotRequest::default());
        let err = result.unwrap_err();
        assert!(matches!(err, ShotwrightError::MissingEncoder));
    }

    #[test]
    fn test_both_prompts_are_encoded() {
        let encoder = FakeEncoder::new();
        let req = request("a lone astronaut", NegativeStrength::Soft);

        let encoded = encode_shot(Some(&encoder), &req).unwrap();

        assert_eq!(encoded.positive, "a lone astronaut.|skip=0");
        assert_eq!(
            encoded.negative,
            "blur, low quality, watermark, text|skip=0"
        );
    }

    #[test]
    fn test_empty_negative_is_still_encoded() {
        let encoder = FakeEncoder::new();
        let req = request("a lone astronaut", NegativeStrength::Off);

        let encoded = encode_shot(Some(&encoder), &req).unwrap();

        // The negative artifact exists even though its text is empty
        assert_eq!(encoded.negative, "|skip=0");
        assert_eq!(
            encoder.calls(),
            vec![
                "tokenize:a lone astronaut.",
                "encode",
                "tokenize:",
                "encode",
            ]
        );
    }

    #[test]
    fn test_clip_skip_derives_a_skipping_encoder() {
        let encoder = FakeEncoder::new();
        let req = ShotRequest {
            clip_skip: 2,
            negative_strength: NegativeStrength::Off,
            ..ShotRequest::default()
        };

        let encoded = encode_shot(Some(&encoder), &req).unwrap();

        assert!(encoded.positive.ends_with("|skip=2"));
        assert!(encoded.negative.ends_with("|skip=2"));
        assert_eq!(encoder.calls()[0], "with_layer_skip:2");
    }

    #[test]
    fn test_zero_clip_skip_uses_the_handle_unmodified() {
        let encoder = FakeEncoder::new();
        let req = request("a quiet street", NegativeStrength::Off);

        encode_shot(Some(&encoder), &req).unwrap();

        assert!(
            encoder
                .calls()
                .iter()
                .all(|call| !call.starts_with("with_layer_skip"))
        );
    }

    #[test]
    fn test_preset_resolution_flows_into_encoding() {
        let encoder = FakeEncoder::new();
        let req = ShotRequest {
            base: "detectives in a rainy alley".to_string(),
            preset: "🌃 Film Noir".to_string(),
            negative_strength: NegativeStrength::Off,
            ..ShotRequest::default()
        };

        let encoded = encode_shot(Some(&encoder), &req).unwrap();

        assert!(encoded.positive.contains("Film Noir Lighting"));
        assert!(encoded.positive.contains("Monochrome Noir"));
    }
}
