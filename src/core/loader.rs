use crate::core::tokenizer::{split, RECORD_DELIMITER};
use crate::domain::model::{GolfIndex, Round};
use crate::domain::ports::RecordSource;
use crate::utils::error::{GolfError, Result};
use crate::utils::validation::validate_record_field;

pub const FIELDS_PER_RECORD: usize = 4;

/// Reads every line from `source` and builds the index.
pub fn load_index<S: RecordSource + ?Sized>(source: &S) -> Result<GolfIndex> {
    tracing::debug!("Reading records from {}", source.describe());
    let lines = source.read_lines()?;
    load_lines(&lines)
}

/// Builds the index from `location;club;player;score` lines.
///
/// All or nothing: the first bad line aborts the load and nothing built so
/// far is returned. Line numbers in errors are 1-based.
pub fn load_lines<L: AsRef<str>>(lines: &[L]) -> Result<GolfIndex> {
    let mut index = GolfIndex::new();

    for (offset, line) in lines.iter().enumerate() {
        let line_number = offset + 1;
        let fields = split(line.as_ref(), RECORD_DELIMITER);

        if fields.len() != FIELDS_PER_RECORD {
            tracing::debug!("Rejecting line {}: {:?}", line_number, line.as_ref());
            return Err(GolfError::StructuralError {
                line_number,
                field_count: fields.len(),
            });
        }

        for (position, field) in fields.iter().enumerate() {
            validate_record_field(line_number, position + 1, field)?;
        }

        let score = parse_score(line_number, &fields[3])?;
        index.insert(
            &fields[0],
            &fields[1],
            Round {
                player: fields[2].clone(),
                score,
            },
        );
    }

    tracing::info!(
        "Loaded {} rounds from {} lines",
        index.round_count(),
        lines.len()
    );
    Ok(index)
}

fn parse_score(line_number: usize, text: &str) -> Result<i32> {
    text.parse::<i32>().map_err(|_| GolfError::InvalidScore {
        line_number,
        value: text.to_string(),
    })
}
