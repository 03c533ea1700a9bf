//! Normalización de referencias de fotos
//!
//! Las evidencias llegan como blobs opacos (data URLs o links de Drive).
//! Para la capa de presentación, los links de compartir de Google Drive se
//! reescriben a links de fetch directo. El valor crudo almacenado en la
//! viagem nunca se modifica - esto aplica solo a las proyecciones de
//! display.

use regex::Regex;
use std::sync::OnceLock;

fn drive_file_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^https://drive\.google\.com/file/d/([A-Za-z0-9_-]+)").unwrap()
    })
}

fn drive_open_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^https://drive\.google\.com/open\?id=([A-Za-z0-9_-]+)").unwrap()
    })
}

/// Reescribe links de compartir de Drive a links de fetch directo.
/// Cualquier otra referencia (data URL, otro host) pasa sin tocar.
pub fn normalize_photo_link(raw: &str) -> String {
    if let Some(caps) = drive_file_regex().captures(raw) {
        return format!("https://drive.google.com/uc?export=view&id={}", &caps[1]);
    }
    if let Some(caps) = drive_open_regex().captures(raw) {
        return format!("https://drive.google.com/uc?export=view&id={}", &caps[1]);
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrites_drive_share_link() {
        let raw = "https://drive.google.com/file/d/1AbC_d-9/view?usp=sharing";
        assert_eq!(
            normalize_photo_link(raw),
            "https://drive.google.com/uc?export=view&id=1AbC_d-9"
        );
    }

    #[test]
    fn test_rewrites_drive_open_link() {
        let raw = "https://drive.google.com/open?id=XyZ123";
        assert_eq!(
            normalize_photo_link(raw),
            "https://drive.google.com/uc?export=view&id=XyZ123"
        );
    }

    #[test]
    fn test_leaves_other_references_untouched() {
        let data_url = "data:image/jpeg;base64,abc123";
        assert_eq!(normalize_photo_link(data_url), data_url);

        let other = "https://fotos.empresa.com/viagem/1.jpg";
        assert_eq!(normalize_photo_link(other), other);
    }
}
