include!("../../lib.rs");

use std::env;
use std::str::FromStr;

use crate::books::factory::create_book_repository;
use crate::books::repository::BookRepository;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_statistics_cmd::{GetStatisticsCommand, GetStatisticsCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory::create_catalog_service;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Configuration;
use crate::core::library::SearchField;
use crate::core::repository::RepositoryStore;
use crate::utils::fs::setup_tracing;

const USAGE: &str = "usage: catalog <operation> [args]
  add <title> <author> <year> <genre> <read|unread>
  remove <title>
  search <title|author> <term>
  list
  stats
  reset";

#[tokio::main]
async fn main() {
    setup_tracing();

    let config = Configuration::from_env();
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(err) = run(&config, &args).await {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn usage() -> CommandError {
    CommandError::Validation { message: USAGE.to_string(), reason_code: None }
}

async fn build_service(config: &Configuration) -> Result<Box<dyn CatalogService>, CommandError> {
    create_catalog_service(config, RepositoryStore::File).await.map_err(CommandError::from)
}

async fn run(config: &Configuration, args: &[String]) -> Result<(), CommandError> {
    match args.first().map(String::as_str) {
        Some("add") => add(config, &args[1..]).await,
        Some("remove") => remove(config, &args[1..]).await,
        Some("search") => search(config, &args[1..]).await,
        Some("list") => list(config).await,
        Some("stats") => stats(config).await,
        Some("reset") => reset(config).await,
        _ => Err(usage()),
    }
}

async fn add(config: &Configuration, args: &[String]) -> Result<(), CommandError> {
    let (title, author, year, genre, read) = match args {
        [title, author, year, genre, read] => (title, author, year, genre, read.as_str()),
        _ => return Err(usage()),
    };
    let read = match read {
        "read" => true,
        "unread" => false,
        _ => return Err(usage()),
    };
    let svc = build_service(config).await?;
    let res = AddBookCommand::new(svc).execute(AddBookCommandRequest::new(
        title.as_str(), author.as_str(), year.as_str(), genre.as_str(), read)).await?;
    println!("Book \"{}\" added successfully!", res.book.title);
    Ok(())
}

async fn remove(config: &Configuration, args: &[String]) -> Result<(), CommandError> {
    let title = match args {
        [title] => title.as_str(),
        _ => return Err(usage()),
    };
    let svc = build_service(config).await?;
    match RemoveBookCommand::new(svc).execute(RemoveBookCommandRequest::new(title)).await {
        Ok(_) => {
            println!("Book \"{}\" removed successfully!", title);
            Ok(())
        }
        Err(CommandError::NotFound { .. }) => {
            Err(CommandError::NotFound { message: format!("Book \"{}\" not found.", title) })
        }
        Err(err) => Err(err),
    }
}

async fn search(config: &Configuration, args: &[String]) -> Result<(), CommandError> {
    let (field, term) = match args {
        [field, term] => (field.as_str(), term.as_str()),
        _ => return Err(usage()),
    };
    let field = SearchField::from_str(field)?;
    let svc = build_service(config).await?;
    let res = SearchBooksCommand::new(svc).execute(SearchBooksCommandRequest::new(field, term)).await?;
    if res.matches.is_empty() {
        // no matches over a populated library is a distinct state, not an error
        println!("No matching books found.");
    } else {
        for book in res.matches {
            println!("{}", book);
        }
    }
    Ok(())
}

async fn list(config: &Configuration) -> Result<(), CommandError> {
    let svc = build_service(config).await?;
    let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::new()).await?;
    if res.books.is_empty() {
        println!("No books in the library.");
    } else {
        for book in res.books {
            println!("{}", book);
        }
    }
    Ok(())
}

async fn stats(config: &Configuration) -> Result<(), CommandError> {
    let svc = build_service(config).await?;
    let res = GetStatisticsCommand::new(svc).execute(GetStatisticsCommandRequest::new()).await?;
    println!("Total Books: {}", res.statistics.total);
    println!("Percentage Read: {:.2}%", res.statistics.percent_read);
    Ok(())
}

async fn reset(config: &Configuration) -> Result<(), CommandError> {
    // bypasses the service on purpose: loading would refuse corrupt storage,
    // and reset exists to recover exactly that state
    let repo = create_book_repository(config, RepositoryStore::File).await;
    repo.reset().await.map_err(CommandError::from)?;
    println!("Library storage reset.");
    Ok(())
}
