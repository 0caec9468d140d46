//! Info command implementation

use super::read_book;
use anyhow::Result;
use folio_core::{Font, InputFormat};
use serde::Serialize;

/// Book info output
#[derive(Serialize)]
struct BookInfo {
    title: String,
    author: String,
    naughty: bool,
    price: u32,
    unknowns: [u16; 3],
    pages: usize,
    lines: usize,
    script_lines: usize,
}

/// Display information about a book
pub fn info(input: &str, from: Option<InputFormat>, json: bool) -> Result<()> {
    let (book, _) = read_book(input, from)?;

    let info = BookInfo {
        title: book.title.clone(),
        author: book.author.clone(),
        naughty: book.naughty,
        price: book.price,
        unknowns: book.unknowns,
        pages: book.pages.len(),
        lines: book.line_count(),
        script_lines: book.lines().filter(|l| l.font == Font::Script).count(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Title:    {}", info.title);
        println!("Author:   {}", info.author);
        println!("Naughty:  {}", if info.naughty { "yes" } else { "no" });
        println!("Price:    {}", info.price);
        println!(
            "Unknowns: {} {} {}",
            info.unknowns[0], info.unknowns[1], info.unknowns[2]
        );
        println!("Pages:    {}", info.pages);
        println!("Lines:    {} ({} script)", info.lines, info.script_lines);
    }

    Ok(())
}
