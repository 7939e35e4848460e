//! Child profile commands.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;

use bb_core::{ChildId, ProfileUpdate, Tracker, format_age};

use crate::ChildAction;

pub fn run<W: Write>(
    writer: &mut W,
    tracker: &mut Tracker,
    action: ChildAction,
    today: NaiveDate,
) -> Result<bool> {
    match action {
        ChildAction::Add {
            name,
            gender,
            dob,
            theme,
        } => {
            let id = tracker.add_child(name.clone(), gender, dob);
            if let Some(theme) = theme {
                tracker.update_child(
                    &id,
                    ProfileUpdate {
                        theme: Some(theme),
                        ..ProfileUpdate::default()
                    },
                );
            }
            writeln!(writer, "Added {name} ({id}).")?;
            if tracker.active_child().is_some_and(|c| c.id == id) {
                writeln!(writer, "{name} is now the active child.")?;
            }
            Ok(true)
        }

        ChildAction::List => {
            if tracker.children().is_empty() {
                writeln!(writer, "No profiles yet.")?;
                return Ok(false);
            }
            let active_id = tracker.active_child().map(|c| c.id.clone());
            for child in tracker.children() {
                let marker = if active_id.as_ref() == Some(&child.id) {
                    "*"
                } else {
                    " "
                };
                writeln!(
                    writer,
                    "{marker} {}  {} ({}, {}, theme {})",
                    child.id,
                    child.name,
                    child.gender,
                    format_age(child.date_of_birth, today),
                    child.theme,
                )?;
            }
            Ok(false)
        }

        ChildAction::Update {
            id,
            name,
            gender,
            dob,
            theme,
        } => {
            let id = ChildId::new(id)?;
            let updated = tracker.update_child(
                &id,
                ProfileUpdate {
                    name,
                    gender,
                    date_of_birth: dob,
                    theme,
                    checklist_items: None,
                },
            );
            if updated {
                writeln!(writer, "Updated {id}.")?;
            } else {
                writeln!(writer, "No profile {id}.")?;
            }
            Ok(updated)
        }

        ChildAction::Remove { id } => {
            let id = ChildId::new(id)?;
            let removed = tracker.remove_child(&id);
            if removed {
                writeln!(writer, "Removed {id} and everything logged for it.")?;
                match tracker.active_child() {
                    Some(child) => writeln!(writer, "{} is now the active child.", child.name)?,
                    None => writeln!(writer, "No profiles left.")?,
                }
            } else {
                writeln!(writer, "No profile {id}.")?;
            }
            Ok(removed)
        }

        ChildAction::Use { id } => {
            let id = ChildId::new(id)?;
            let switched = tracker.set_active_child(&id);
            if switched {
                // Present after set_active_child succeeded
                if let Some(child) = tracker.active_child() {
                    writeln!(writer, "{} is now the active child.", child.name)?;
                }
            } else {
                writeln!(writer, "No profile {id}.")?;
            }
            Ok(switched)
        }
    }
}
