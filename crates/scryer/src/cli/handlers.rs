//! Command handlers.

use super::commands::{Commands, OutputFormat};
use scryer::{
    ApiList, Card, CardRequests, JsonError, Requester, ScryerResult, SearchParams, Set,
    SetRequests,
};
use serde::Serialize;
use tracing::{debug, instrument};

/// Run one command against `client` and print its result.
#[instrument(skip(client, format))]
pub async fn run_command<R>(client: &R, command: Commands, format: OutputFormat) -> ScryerResult<()>
where
    R: Requester,
{
    match command {
        Commands::Card { id } => {
            let card = client.get_card_by_id(&id).await?;
            print_card(&card, format)
        }
        Commands::Named { name, fuzzy, set } => {
            let card = if fuzzy {
                client.search_cards_named(None, Some(&name), set.as_deref()).await?
            } else {
                client.search_cards_named(Some(&name), None, set.as_deref()).await?
            };
            print_card(&card, format)
        }
        Commands::Search {
            q,
            page,
            order,
            dir,
            unique,
        } => {
            let mut builder = SearchParams::builder();
            builder.q(q).page(page);
            if let Some(order) = order {
                builder.order(order);
            }
            if let Some(dir) = dir {
                builder.dir(dir);
            }
            if let Some(unique) = unique {
                builder.unique(unique);
            }
            let params = builder.build()?;
            let list = client.search_cards(&params).await?;
            print_list(&list, format)
        }
        Commands::Sets => {
            let list = client.get_all_sets().await?;
            print_list(&list, format)
        }
        Commands::Set { code } => {
            let set = client.get_set_by_code(&code).await?;
            match format {
                OutputFormat::Json => print_json(&set),
                OutputFormat::Human => {
                    println!("{}", set_line(&set));
                    Ok(())
                }
            }
        }
        Commands::Random { q } => {
            let card = client.get_random_card(q.as_deref()).await?;
            print_card(&card, format)
        }
        Commands::Autocomplete { q, include_extras } => {
            let catalog = client.cards_autocomplete(&q, include_extras).await?;
            match format {
                OutputFormat::Json => print_json(&catalog),
                OutputFormat::Human => {
                    for name in &catalog.data {
                        println!("{}", name);
                    }
                    Ok(())
                }
            }
        }
        Commands::Rulings { id } => {
            let rulings = client.get_rulings_by_card_id(&id).await?;
            match format {
                OutputFormat::Json => print_json(&rulings),
                OutputFormat::Human => {
                    for ruling in &rulings {
                        println!("{} [{}] {}", ruling.published_at, ruling.source, ruling.comment);
                    }
                    Ok(())
                }
            }
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> ScryerResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| JsonError::new(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

fn print_card(card: &Card, format: OutputFormat) -> ScryerResult<()> {
    match format {
        OutputFormat::Json => print_json(card),
        OutputFormat::Human => {
            println!("{}", card_line(card));
            Ok(())
        }
    }
}

fn print_list(list: &ApiList, format: OutputFormat) -> ScryerResult<()> {
    match format {
        OutputFormat::Json => print_json(list),
        OutputFormat::Human => {
            for card in list.cards() {
                println!("{}", card_line(card));
            }
            for set in list.sets() {
                println!("{}", set_line(set));
            }
            if let Some(total) = list.total_cards {
                println!("Total: {} cards", total);
            }
            if list.has_more {
                debug!(next_page = ?list.next_page, "More pages available");
                println!("(more pages available)");
            }
            Ok(())
        }
    }
}

fn card_line(card: &Card) -> String {
    format!(
        "{}  {}  {} ({}) #{}",
        card.name,
        card.mana_cost.as_deref().unwrap_or(""),
        card.set_name,
        card.set.to_uppercase(),
        card.collector_number
    )
}

fn set_line(set: &Set) -> String {
    format!(
        "{}  {}  {} cards  {}",
        set.code.to_uppercase(),
        set.name,
        set.card_count,
        set.released_at
            .map(|date| date.to_string())
            .unwrap_or_default()
    )
}
