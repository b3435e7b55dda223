//! Instance adapter — the only code that walks model atoms.
//!
//! Reads `String`, `PlayedNote` and `Interval` atoms and produces a
//! [`Fretboard`] of plain indices. The relations it understands:
//!
//! | relation | shape |
//! |---|---|
//! | `stringPos` | `String -> Int` (orders the strings) |
//! | `stringStart` | `String -> Interval` (open note of the string) |
//! | `pos` | `Interval -> Int` (1-based pitch class, C = 1) |
//! | `string`, `fret` | `PlayedNote -> String`, `PlayedNote -> Int` |
//! | `frets` | `String -> Int -> Interval` (interval overlay) |
//!
//! Models without `stringStart` take their open notes from the fallback
//! tuning in [`AdapterOptions`].

use std::collections::HashMap;

use crate::error::{FretError, FretResult};
use crate::instance::{atom_index, Instance};
use crate::model::{FretPosition, Fretboard, StringInfo};
use crate::pitch::{ascending_base_octaves, build_standard_tuning, Tuning, MAX_FRET, STANDARD_LOWEST_OCTAVE};

/// Which end of the neck the model's first string (lowest `stringPos`) is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringOrder {
    /// First string is the highest (thinnest), as on a tab staff.
    #[default]
    HighestFirst,
    LowestFirst,
}

#[derive(Debug, Clone)]
pub struct AdapterOptions {
    pub order: StringOrder,
    /// Open notes used when the model carries no `stringStart`, and the
    /// octave table for every tuning it builds (when its length matches).
    pub fallback_tuning: Tuning,
    /// Explicit base-octave table, lowest string first. Overrides the
    /// inferred octaves for model tunings.
    pub base_octaves: Option<Vec<i32>>,
}

impl Default for AdapterOptions {
    fn default() -> Self {
        Self {
            order: StringOrder::default(),
            fallback_tuning: build_standard_tuning(),
            base_octaves: None,
        }
    }
}

/// Build a fretboard from a parsed instance.
pub fn fretboard_from_instance(instance: &Instance, options: &AdapterOptions) -> FretResult<Fretboard> {
    let atoms = ordered_strings(instance, options.order);
    let tuning = if atoms.is_empty() {
        log::debug!("instance has no String atoms, using fallback tuning");
        options.fallback_tuning.clone()
    } else {
        model_tuning(instance, &atoms, options)?
    };

    let mut board = Fretboard::new(tuning);
    for (info, atom) in board.strings.iter_mut().zip(&atoms) {
        *info = StringInfo {
            atom: Some(atom.clone()),
        };
    }

    let index_of: HashMap<&str, usize> = atoms
        .iter()
        .enumerate()
        .map(|(i, a)| (a.as_str(), i))
        .collect();

    for played in instance.atoms("PlayedNote") {
        let Some(string_atom) = instance.join_one(played, "string") else {
            log::warn!("PlayedNote {played} has no string, skipped");
            continue;
        };
        let string_index = *index_of
            .get(string_atom)
            .ok_or_else(|| FretError::Instance(format!("{played} refers to unknown string {string_atom}")))?;
        let fret = int_field(instance, played, "fret")?;
        board.play(FretPosition::new(string_index, fret_number(fret)?))?;
    }

    let mut marks = Vec::new();
    for tuple in instance.tuples("frets") {
        let [string_atom, fret, interval] = tuple.as_slice() else {
            return Err(FretError::Instance(format!(
                "frets tuple has {} columns, expected 3",
                tuple.len()
            )));
        };
        let Some(&string_index) = index_of.get(string_atom.as_str()) else {
            return Err(FretError::Instance(format!(
                "frets refers to unknown string {string_atom}"
            )));
        };
        let fret = atom_index(fret)
            .ok_or_else(|| FretError::Instance(format!("fret '{fret}' is not a number")))?;
        marks.push((FretPosition::new(string_index, fret_number(fret)?), interval.clone()));
    }
    board.set_intervals(marks)?;

    log::debug!(
        "adapted instance: {} strings, {} played, {} interval marks",
        board.string_count(),
        board.played.len(),
        board.intervals.len()
    );
    Ok(board)
}

/// String atoms, lowest string first.
fn ordered_strings(instance: &Instance, order: StringOrder) -> Vec<String> {
    let mut atoms: Vec<(i64, &String)> = instance
        .atoms("String")
        .iter()
        .map(|a| {
            let pos = instance
                .join_one(a, "stringPos")
                .and_then(atom_index)
                .or_else(|| atom_index(a))
                .unwrap_or(i64::MAX);
            (pos, a)
        })
        .collect();
    atoms.sort();
    if order == StringOrder::HighestFirst {
        atoms.reverse();
    }
    atoms.into_iter().map(|(_, a)| a.clone()).collect()
}

fn model_tuning(instance: &Instance, atoms: &[String], options: &AdapterOptions) -> FretResult<Tuning> {
    let offsets: Vec<u8> = if instance.has_field("stringStart") {
        atoms
            .iter()
            .map(|a| open_offset(instance, a))
            .collect::<FretResult<_>>()?
    } else {
        let fallback = options.fallback_tuning.offsets();
        if fallback.len() != atoms.len() {
            return Err(FretError::InvalidTuning(format!(
                "model has {} strings but fallback tuning has {}",
                atoms.len(),
                fallback.len()
            )));
        }
        fallback.to_vec()
    };

    let base = match &options.base_octaves {
        Some(table) => table.clone(),
        None if offsets == options.fallback_tuning.offsets() => {
            options.fallback_tuning.base_octaves().to_vec()
        }
        None => ascending_base_octaves(&offsets, STANDARD_LOWEST_OCTAVE),
    };
    Tuning::with_base_octaves(offsets, base)
}

/// `string.stringStart.pos - 1`, wrapped into 0..=11.
fn open_offset(instance: &Instance, string_atom: &str) -> FretResult<u8> {
    let interval = instance
        .join_one(string_atom, "stringStart")
        .ok_or_else(|| FretError::MissingAtom {
            atom: string_atom.to_string(),
            field: "stringStart".into(),
        })?;
    let pos = int_field(instance, interval, "pos")?;
    Ok((pos - 1).rem_euclid(12) as u8)
}

fn int_field(instance: &Instance, atom: &str, field: &str) -> FretResult<i64> {
    let value = instance
        .join_one(atom, field)
        .ok_or_else(|| FretError::MissingAtom {
            atom: atom.to_string(),
            field: field.to_string(),
        })?;
    atom_index(value).ok_or_else(|| FretError::Instance(format!("{atom}.{field} = '{value}' is not a number")))
}

fn fret_number(fret: i64) -> FretResult<u8> {
    u8::try_from(fret)
        .ok()
        .filter(|f| *f <= MAX_FRET)
        .ok_or_else(|| FretError::out_of_range("fret", fret, MAX_FRET))
}
