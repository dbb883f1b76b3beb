use biblio_core::domain::{Book, Genre, Reader, ReaderCategory};
use biblio_core::ports::Clock;
use biblio_core::{LibraryError, LibraryManager};
use tracing::debug;

struct Entry {
  isbn: &'static str,
  title: &'static str,
  year: i32,
  genre: Genre,
  pages: u32,
  authors: &'static [&'static str],
}

const BOOKS: &[Entry] = &[
  Entry {
    isbn: "978-0-261-10238-5",
    title: "The Fellowship of the Ring",
    year: 1954,
    genre: Genre::Fantasy,
    pages: 423,
    authors: &["J. R. R. Tolkien"],
  },
  Entry {
    isbn: "978-0-00-711931-8",
    title: "Murder on the Orient Express",
    year: 1934,
    genre: Genre::Detective,
    pages: 256,
    authors: &["Agatha Christie"],
  },
  Entry {
    isbn: "978-0-393-31604-9",
    title: "Guns, Germs, and Steel",
    year: 1997,
    genre: Genre::History,
    pages: 480,
    authors: &["Jared Diamond"],
  },
  Entry {
    isbn: "978-0-262-03384-8",
    title: "Introduction to Algorithms",
    year: 2009,
    genre: Genre::Science,
    pages: 1312,
    authors: &["Thomas H. Cormen", "Charles E. Leiserson", "Ronald L. Rivest", "Clifford Stein"],
  },
  Entry {
    isbn: "978-0-201-63361-0",
    title: "Design Patterns",
    year: 1994,
    genre: Genre::Science,
    pages: 395,
    authors: &["Erich Gamma", "Richard Helm", "Ralph Johnson", "John Vlissides"],
  },
  Entry {
    isbn: "978-0-14-143951-8",
    title: "Pride and Prejudice",
    year: 1813,
    genre: Genre::Romance,
    pages: 480,
    authors: &["Jane Austen"],
  },
  Entry {
    isbn: "978-0-06-112008-4",
    title: "To Kill a Mockingbird",
    year: 1960,
    genre: Genre::Fiction,
    pages: 336,
    authors: &["Harper Lee"],
  },
  Entry {
    isbn: "978-0-7432-7356-5",
    title: "The Wright Brothers",
    year: 2015,
    genre: Genre::Biography,
    pages: 336,
    authors: &["David McCullough"],
  },
  Entry {
    isbn: "978-0-06-440055-8",
    title: "Where the Wild Things Are",
    year: 1963,
    genre: Genre::Children,
    pages: 48,
    authors: &["Maurice Sendak"],
  },
];

const READERS: &[(&str, &str, &str, ReaderCategory)] = &[
  ("R001", "Ada Byron", "ada@biblio.org", ReaderCategory::Student),
  ("R002", "Grace Hopper", "grace@biblio.org", ReaderCategory::Teacher),
  ("R003", "Alan Kay", "alan@biblio.org", ReaderCategory::Regular),
  ("R004", "Barbara Liskov", "barbara@biblio.org", ReaderCategory::Vip),
];

fn build(entry: &Entry) -> Result<Book, LibraryError> {
  let mut book = Book::new(entry.isbn, entry.title, entry.year, entry.genre);
  book.set_page_count(entry.pages);
  for author in entry.authors {
    book.add_author(author)?;
  }
  Ok(book)
}

/// Loads the demo catalog and members. Returns how many books were new.
///
/// Entries already present are left untouched, so seeding twice is harmless.
pub fn seed<C: Clock>(library: &mut LibraryManager<C>) -> Result<usize, LibraryError> {
  let mut added = 0;
  for entry in BOOKS {
    if library.add_book(build(entry)?) {
      added += 1;
    }
  }
  for &(id, name, email, category) in READERS {
    library.add_reader(Reader::new(id, name, email, category));
  }
  debug!(added, total = BOOKS.len(), "catalog seeded");
  Ok(added)
}
