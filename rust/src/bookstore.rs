//! Sample object graph for the visualization demo.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Store-internal; shown by `Debug`, never serialized.
    #[serde(skip)]
    pub internal_id: u32,
    pub title: String,
    pub author: Author,
    /// Shared between all books of the same genre.
    pub genre: Rc<Genre>,
    pub price: f64,
    pub isbn: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookstore {
    pub name: String,
    pub address: String,
    pub books: Vec<Book>,
}

impl Bookstore {
    /// Three programming books sharing one genre.
    pub fn sample() -> Self {
        let programming = Rc::new(Genre {
            name: "Programming".to_string(),
            description: "Books related to programming and software development.".to_string(),
        });

        let book = |internal_id, title: &str, author: &str, age, price, isbn: &str, quantity| Book {
            internal_id,
            title: title.to_string(),
            author: Author {
                name: author.to_string(),
                age,
            },
            genre: Rc::clone(&programming),
            price,
            isbn: isbn.to_string(),
            quantity,
        };

        Self {
            name: "Scott's Computer Book Emporium".to_string(),
            address: "123 Fictional Street".to_string(),
            books: vec![
                book(1, "The Go Programming Language", "Alan A. A. Donovan", 45, 39.99, "9780134190440", 10),
                book(2, "Clean Code", "Robert C. Martin", 65, 29.99, "9780132350884", 5),
                book(3, "The Pragmatic Programmer", "Andrew Hunt", 50, 34.99, "9780201616224", 8),
            ],
        }
    }
}

// Display is the terse form: values only, nested in braces.

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.name, self.age)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.name, self.description)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{} {} {} {} {} {} {}}}",
            self.internal_id, self.title, self.author, self.genre, self.price, self.isbn, self.quantity
        )
    }
}

impl fmt::Display for Bookstore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {} [", self.name, self.address)?;
        for (i, book) in self.books.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", book)?;
        }
        f.write_str("]}")
    }
}
