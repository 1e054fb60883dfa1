//! In-memory session history of generated logos.

use logogen::GeneratedLogo;

/// Prepend a logo to the history; entries stay ordered newest-first.
pub fn add(entries: &mut Vec<GeneratedLogo>, logo: GeneratedLogo) {
    entries.insert(0, logo);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logo(id: &str, timestamp: i64) -> GeneratedLogo {
        GeneratedLogo {
            id: id.into(),
            image_url: "data:image/png;base64,QUFBQQ==".into(),
            prompt: format!("logo {id}"),
            timestamp,
            model: "gemini-2.5-flash-image".into(),
        }
    }

    #[test]
    fn test_add_keeps_newest_first() {
        let mut entries = Vec::new();
        for i in 0..5 {
            add(&mut entries, logo(&i.to_string(), i));
        }

        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].id, "4");
        assert_eq!(entries[4].id, "0");
    }
}
