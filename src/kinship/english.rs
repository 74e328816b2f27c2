//! kinship::english
//!
//! Built-in English kinship namer.

use crate::numbering::Step;

use super::traits::KinshipNamer;

/// English kinship terms (locale `"en"`).
///
/// Depth 1 yields `father`/`mother`; depth 2 qualifies the grandparent
/// with `paternal`/`maternal` from the first step; deeper walks stack
/// `great-` prefixes on the grandparent term.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishKinship;

impl KinshipNamer for EnglishKinship {
    fn locale(&self) -> &'static str {
        "en"
    }

    fn name_for_path(&self, path: &[Step]) -> String {
        match path {
            [] => "self".to_string(),
            [Step::Father] => "father".to_string(),
            [Step::Mother] => "mother".to_string(),
            [side, last] => {
                let side = match side {
                    Step::Father => "paternal",
                    Step::Mother => "maternal",
                };
                format!("{} {}", side, grandparent(*last))
            }
            [.., last] => {
                let mut label = "great-".repeat(path.len() - 2);
                label.push_str(grandparent(*last));
                label
            }
        }
    }
}

fn grandparent(step: Step) -> &'static str {
    match step {
        Step::Father => "grandfather",
        Step::Mother => "grandmother",
    }
}
