use anyhow::bail;
use clap::Parser;
use docshelf::cli::{Cli, Commands};
use docshelf::flatten::flatten;
use docshelf::indexer::{default_roots, scan};
use docshelf::page::Page;
use docshelf::resolver::{resolve_index, ExpansionState};
use docshelf::search::SearchIndex;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    docshelf::tracing::init();
    let cli = Cli::parse();

    let roots = if cli.roots.is_empty() {
        default_roots()
    } else {
        cli.roots.clone()
    };

    let outcome = scan(&roots).await;
    if outcome.tree.is_empty() {
        tracing::warn!("no documentation found under {} roots", roots.len());
    }

    match cli.command {
        Commands::Tree => {
            for root in &outcome.tree.roots {
                print_page(root, 0);
            }
        }
        Commands::Search { query, limit } => {
            let (entries, _) = flatten(&outcome.tree);
            let index = SearchIndex::new(entries);
            for hit in index.filter(&query).into_iter().take(limit) {
                println!(
                    "{:<12} {:<40} {:.3}",
                    hit.entry.tag, hit.entry.search_key, hit.score
                );
            }
        }
        Commands::Resolve { uri } => {
            let (_, registry) = flatten(&outcome.tree);
            let Some(path) = registry.get(&uri) else {
                bail!("uri not indexed: {uri}");
            };
            let mut expansion = ExpansionState::default();
            let index = resolve_index(&outcome.tree, path, &mut expansion);
            println!("path: {path:?}");
            println!("row:  {index}");
        }
    }

    Ok(())
}

fn print_page(page: &Page, depth: usize) {
    let indent = "  ".repeat(depth);
    match page.tag {
        Some(tag) => println!("{indent}{} [{tag}]", page.name),
        None => println!("{indent}{}", page.name),
    }
    for child in &page.children {
        print_page(child, depth + 1);
    }
}
