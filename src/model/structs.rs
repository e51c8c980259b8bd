use serde::{Deserialize, Serialize};

// Domain records shared across platforms
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    /// Whole currency units; 0 means free.
    pub price: u32,
    #[serde(default)]
    pub body: String,
}

impl Course {
    pub fn new(id: impl Into<String>, title: impl Into<String>, price: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            body: String::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn is_paid(&self) -> bool {
        self.price > 0
    }
}

/// Card fields entered on the mocked payment form. Only presence is checked.
#[derive(Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CardDetails {
    pub number: String,
    pub expiry: String,
    pub cvc: String,
    pub name: String,
}

impl CardDetails {
    pub fn new(
        number: impl Into<String>,
        expiry: impl Into<String>,
        cvc: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            expiry: expiry.into(),
            cvc: cvc.into(),
            name: name.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        [&self.number, &self.expiry, &self.cvc, &self.name]
            .iter()
            .all(|field| !field.is_empty())
    }

    /// Card number with everything but the last four characters masked.
    pub fn masked_number(&self) -> String {
        let chars: Vec<char> = self.number.chars().filter(|c| !c.is_whitespace()).collect();
        let keep = chars.len().min(4);
        let hidden = chars.len() - keep;
        let mut out = "*".repeat(hidden);
        out.extend(&chars[hidden..]);
        out
    }
}

impl std::fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardDetails")
            .field("number", &self.masked_number())
            .field("expiry", &self.expiry)
            .field("cvc", &"***")
            .field("name", &self.name)
            .finish()
    }
}

/// Transient UI flags of one enrollment page visit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionState {
    pub loading: bool,
    pub error: Option<String>,
    pub show_payment_form: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_course_is_not_paid() {
        assert!(!Course::new("9", "Intro", 0).is_paid());
        assert!(Course::new("1", "Bootcamp", 299).is_paid());
    }

    #[test]
    fn completeness_requires_every_field() {
        let full = CardDetails::new("4242 4242 4242 4242", "12/30", "123", "Jane");
        assert!(full.is_complete());

        for blank in 0..4 {
            let mut card = full.clone();
            match blank {
                0 => card.number.clear(),
                1 => card.expiry.clear(),
                2 => card.cvc.clear(),
                _ => card.name.clear(),
            }
            assert!(!card.is_complete());
        }
    }

    #[test]
    fn whitespace_only_fields_are_present() {
        assert!(CardDetails::new(" ", "\t", "  ", " ").is_complete());
        assert!(!CardDetails::new(" ", "", " ", " ").is_complete());
    }

    #[test]
    fn debug_output_masks_card_data() {
        let card = CardDetails::new("4242 4242 4242 4242", "12/30", "987", "Jane");
        let rendered = format!("{card:?}");
        assert!(rendered.contains("************4242"));
        assert!(!rendered.contains("987"));
        assert_eq!(CardDetails::new("42", "", "", "").masked_number(), "42");
    }
}
