use crate::cli::context::Context;
use crate::cli::output::emit;
use crate::opt::{Add, Delete, Update};
use anyhow::{Result, anyhow};
use cadence_model::entry::{Entry, EntryDraft, EntryPatch};
use chrono::Local;

fn print_entry(entry: &Entry) {
    println!(
        "{}  {}  [{} / {}]  {}",
        entry.id,
        entry.day(),
        entry.impact,
        entry.mood,
        entry.title
    );
    if let Some(description) = &entry.description {
        println!("    {description}");
    }
}

pub(crate) async fn add(ctx: &Context, add: Add) -> Result<()> {
    let Add {
        title,
        description,
        date,
        impact,
        mood,
    } = add;
    let draft = EntryDraft {
        title,
        description,
        date: date.unwrap_or_else(|| Local::now().fixed_offset()),
        impact,
        mood,
    };

    let entry = ctx.store.add_entry(draft).await.into_result()?;
    let unlocked = ctx.store.newly_unlocked_badges();
    for badge in &unlocked {
        ctx.store.clear_newly_unlocked_badge(badge.id);
    }

    emit(
        ctx.json,
        &serde_json::json!({ "entry": &entry, "unlocked": &unlocked }),
        || {
            print_entry(&entry);
            for badge in &unlocked {
                println!("Badge unlocked: {} ({})", badge.name, badge.description);
            }
        },
    )
}

pub(crate) fn list(ctx: &Context) -> Result<()> {
    let entries = ctx.store.entries();
    emit(ctx.json, &entries, || {
        if entries.is_empty() {
            println!("No wins logged yet");
        }
        entries.iter().for_each(print_entry);
    })
}

pub(crate) async fn update(ctx: &Context, update: Update) -> Result<()> {
    let mut entry = ctx
        .store
        .snapshot()
        .entry(update.id)
        .cloned()
        .ok_or_else(|| anyhow!("entry {} not found", update.id))?;
    let description = if update.clear_description {
        Some(None)
    } else {
        update.description.map(Some)
    };
    let patch = EntryPatch {
        title: update.title,
        description,
        date: update.date,
        impact: update.impact,
        mood: update.mood,
    };
    if patch.is_empty() {
        return Err(anyhow!("nothing to update"));
    }
    patch.apply_to(&mut entry);

    let entry = ctx.store.update_entry(entry).await.into_result()?;
    emit(ctx.json, &entry, || print_entry(&entry))
}

pub(crate) async fn delete(ctx: &Context, delete: Delete) -> Result<()> {
    let entry = ctx.store.delete_entry(delete.id).await.into_result()?;
    emit(ctx.json, &entry, || println!("Deleted \"{}\"", entry.title))
}
