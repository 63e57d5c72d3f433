use core::fmt;

use serde::Serialize;

use labkit_core::{rules, DomainResult, Fields, ShowInfo, ValidatedEntity};

/// Common read-only surface of every book.
pub trait Document: fmt::Display {
    fn title(&self) -> &str;

    fn author(&self) -> &str;
}

/// Base book: a title and an author, both fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    title: String,
    author: String,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            title: rules::ensure_not_empty("title", title)?,
            author: rules::ensure_not_empty("author", author)?,
        })
    }
}

impl Document for Book {
    fn title(&self) -> &str {
        &self.title
    }

    fn author(&self) -> &str {
        &self.author
    }
}

impl ValidatedEntity for Book {
    const KIND: &'static str = "book";

    fn from_fields(fields: &Fields<'_>) -> DomainResult<Self> {
        let title = rules::ensure_not_empty("title", fields.text("title")?)?;
        let author = fields.text("author")?;
        Self::new(title, author)
    }
}

impl ShowInfo for Book {}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Book \"{}\". Author: {}.", self.title, self.author)
    }
}

/// A printed book with a page count.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct PaperBook {
    #[serde(flatten)]
    book: Book,
    pages: i64,
}

impl PaperBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>, pages: i64) -> DomainResult<Self> {
        let book = Book::new(title, author)?;
        let pages = rules::ensure_positive_int("pages", pages)?;
        Ok(Self { book, pages })
    }

    pub fn pages(&self) -> i64 {
        self.pages
    }

    pub fn set_pages(&mut self, pages: i64) -> DomainResult<()> {
        self.pages = rules::ensure_positive_int("pages", pages)?;
        tracing::debug!(title = %self.book.title, pages, "page count updated");
        Ok(())
    }
}

impl Document for PaperBook {
    fn title(&self) -> &str {
        self.book.title()
    }

    fn author(&self) -> &str {
        self.book.author()
    }
}

impl ValidatedEntity for PaperBook {
    const KIND: &'static str = "paper_book";

    fn from_fields(fields: &Fields<'_>) -> DomainResult<Self> {
        let book = Book::from_fields(fields)?;
        let pages = fields.integer("pages")?;
        Self::new(book.title, book.author, pages)
    }
}

impl ShowInfo for PaperBook {}

impl fmt::Display for PaperBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Pages: {}.", self.book, self.pages)
    }
}

impl fmt::Debug for PaperBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaperBook")
            .field("title", &self.book.title)
            .field("author", &self.book.author)
            .field("pages", &self.pages)
            .finish()
    }
}

/// A recorded book with a running time.
#[derive(Clone, PartialEq, Serialize)]
pub struct AudioBook {
    #[serde(flatten)]
    book: Book,
    duration: f64,
}

impl AudioBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        duration: f64,
    ) -> DomainResult<Self> {
        let book = Book::new(title, author)?;
        let duration = rules::ensure_positive("duration", duration)?;
        Ok(Self { book, duration })
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn set_duration(&mut self, duration: f64) -> DomainResult<()> {
        self.duration = rules::ensure_positive("duration", duration)?;
        tracing::debug!(title = %self.book.title, duration, "duration updated");
        Ok(())
    }
}

impl Document for AudioBook {
    fn title(&self) -> &str {
        self.book.title()
    }

    fn author(&self) -> &str {
        self.book.author()
    }
}

impl ValidatedEntity for AudioBook {
    const KIND: &'static str = "audio_book";

    fn from_fields(fields: &Fields<'_>) -> DomainResult<Self> {
        let book = Book::from_fields(fields)?;
        let duration = fields.number("duration")?;
        Self::new(book.title, book.author, duration)
    }
}

impl ShowInfo for AudioBook {}

impl fmt::Display for AudioBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Duration: {}.", self.book, self.duration)
    }
}

impl fmt::Debug for AudioBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioBook")
            .field("title", &self.book.title)
            .field("author", &self.book.author)
            .field("duration", &self.duration)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labkit_core::DomainError;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn base_book_display_and_debug() {
        let book = Book::new("War and Peace", "Leo Tolstoy").unwrap();
        assert_eq!(book.to_string(), "Book \"War and Peace\". Author: Leo Tolstoy.");
        assert_eq!(
            format!("{book:?}"),
            r#"Book { title: "War and Peace", author: "Leo Tolstoy" }"#
        );
    }

    #[test]
    fn paper_book_extends_base_text() {
        let book = PaperBook::new("War and Peace", "Leo Tolstoy", 1225).unwrap();
        assert_eq!(
            book.to_string(),
            "Book \"War and Peace\". Author: Leo Tolstoy. Pages: 1225."
        );
        assert_eq!(
            format!("{book:?}"),
            r#"PaperBook { title: "War and Peace", author: "Leo Tolstoy", pages: 1225 }"#
        );
    }

    #[test]
    fn audio_book_extends_base_text() {
        let book = AudioBook::new("Dune", "Frank Herbert", 21.5).unwrap();
        assert_eq!(
            book.to_string(),
            "Book \"Dune\". Author: Frank Herbert. Duration: 21.5."
        );
        assert_eq!(
            format!("{book:?}"),
            r#"AudioBook { title: "Dune", author: "Frank Herbert", duration: 21.5 }"#
        );
    }

    #[test]
    fn setters_validate_before_mutating() {
        let mut paper = PaperBook::new("Dune", "Frank Herbert", 412).unwrap();
        assert!(paper.set_pages(0).unwrap_err().is_validation());
        assert_eq!(paper.pages(), 412);
        paper.set_pages(500).unwrap();
        assert_eq!(paper.pages(), 500);

        let mut audio = AudioBook::new("Dune", "Frank Herbert", 21.0).unwrap();
        assert!(audio.set_duration(-2.0).unwrap_err().is_validation());
        assert_eq!(audio.duration(), 21.0);
        audio.set_duration(3.0).unwrap();
        assert_eq!(audio.to_string(), "Book \"Dune\". Author: Frank Herbert. Duration: 3.");
    }

    #[test]
    fn title_and_author_are_required() {
        assert!(Book::new("", "Anon").unwrap_err().is_validation());
        assert!(PaperBook::new("Dune", "", 10).unwrap_err().is_validation());
        assert!(PaperBook::new("Dune", " ", 10).is_ok());
    }

    #[test]
    fn write_info_uses_display() {
        let mut out = Vec::new();
        PaperBook::new("Dune", "Frank Herbert", 412)
            .unwrap()
            .write_info(&mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Book \"Dune\". Author: Frank Herbert. Pages: 412.\n"
        );
    }

    #[test]
    fn documents_share_a_surface() {
        let shelf: Vec<Box<dyn Document>> = vec![
            Box::new(Book::new("A", "X").unwrap()),
            Box::new(PaperBook::new("B", "Y", 10).unwrap()),
            Box::new(AudioBook::new("C", "Z", 1.5).unwrap()),
        ];
        let titles: Vec<&str> = shelf.iter().map(|d| d.title()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }

    #[test]
    fn from_json_checks_subtype_field_kind() {
        let err = PaperBook::from_json(&json!({
            "title": "Dune", "author": "Frank Herbert", "pages": 412.5
        }))
        .unwrap_err();
        assert_eq!(err, DomainError::type_mismatch("pages", "an integer", "a float"));

        let err = AudioBook::from_json(&json!({
            "title": "Dune", "author": null, "duration": 1
        }))
        .unwrap_err();
        assert_eq!(err, DomainError::type_mismatch("author", "a string", "null"));

        let book = AudioBook::from_json(&json!({
            "title": "Dune", "author": "Frank Herbert", "duration": 21
        }))
        .unwrap();
        assert_eq!(book.duration(), 21.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a rejected page count never changes the book.
        #[test]
        fn non_positive_pages_leave_book_untouched(pages in -1_000i64..=0i64) {
            let mut book = PaperBook::new("Dune", "Frank Herbert", 412).unwrap();
            prop_assert!(book.set_pages(pages).is_err());
            prop_assert_eq!(book.pages(), 412);
        }
    }
}
