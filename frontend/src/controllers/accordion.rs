/// Single-open accordion: at most one entry is expanded at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    expanded: Option<String>,
}

impl Accordion {
    pub fn with_expanded(id: impl Into<String>) -> Self {
        Self {
            expanded: Some(id.into()),
        }
    }

    pub fn toggle(&mut self, id: &str) {
        if self.is_expanded(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_another_entry_closes_the_first() {
        let mut faq = Accordion::default();
        faq.toggle("faq-1");
        faq.toggle("faq-2");
        assert!(!faq.is_expanded("faq-1"));
        assert!(faq.is_expanded("faq-2"));
        assert_eq!(faq.expanded(), Some("faq-2"));
    }

    #[test]
    fn toggling_twice_closes_everything() {
        let mut faq = Accordion::default();
        faq.toggle("faq-1");
        faq.toggle("faq-1");
        assert_eq!(faq.expanded(), None);
    }

    #[test]
    fn starts_with_a_preselected_entry() {
        let mut faq = Accordion::with_expanded("faq-3");
        assert!(faq.is_expanded("faq-3"));
        faq.toggle("faq-3");
        assert!(!faq.is_expanded("faq-3"));
    }
}
