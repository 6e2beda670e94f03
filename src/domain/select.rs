use tracing::debug;

use crate::domain::contact::Contact;
use crate::errors::AppError;

/// Where a choice among several search results comes from.
///
/// The shell implements this over the terminal; tests script it.
pub trait IndexSource {
    /// Called once with the enumerated candidates before the first answer.
    fn present(&mut self, _candidates: &[&Contact]) {}

    /// Raw answer for the presented candidates, or `None` once no more input
    /// is available.
    fn next_choice(&mut self) -> Option<String>;

    /// Called after an answer was refused, before asking again.
    fn rejected(&mut self, _err: &AppError) {}
}

/// Turn a 1-based answer into an index into a list of `len` items.
pub fn parse_choice(input: &str, len: usize) -> Result<usize, AppError> {
    let choice: usize = input.trim().parse().map_err(|_| {
        AppError::Selection("Invalid input. Please enter a valid index number.".to_string())
    })?;

    if choice == 0 || choice > len {
        return Err(AppError::Selection(
            "Invalid selection. Please enter an index number corresponding to one of the contacts listed."
                .to_string(),
        ));
    }
    Ok(choice - 1)
}

/// Pick one entry from `results`.
///
/// A single result is chosen without asking. Several results are offered to
/// `source` until it gives a valid 1-based number or runs dry. Returns the
/// index into `results`, or `None` when nothing was selected.
pub fn select(results: &[&Contact], source: &mut dyn IndexSource) -> Option<usize> {
    match results.len() {
        0 => None,
        1 => Some(0),
        len => {
            source.present(results);
            loop {
                let answer = source.next_choice()?;

                match parse_choice(&answer, len) {
                    Ok(idx) => break Some(idx),
                    Err(e) => {
                        debug!(answer = %answer, "rejected selection");
                        source.rejected(&e);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scripted {
        answers: Vec<&'static str>,
        presented: usize,
        rejections: usize,
    }

    impl Scripted {
        fn new(answers: &[&'static str]) -> Self {
            let mut answers = answers.to_vec();
            answers.reverse();
            Scripted {
                answers,
                presented: 0,
                rejections: 0,
            }
        }
    }

    impl IndexSource for Scripted {
        fn present(&mut self, candidates: &[&Contact]) {
            self.presented = candidates.len();
        }

        fn next_choice(&mut self) -> Option<String> {
            self.answers.pop().map(str::to_string)
        }

        fn rejected(&mut self, _err: &AppError) {
            self.rejections += 1;
        }
    }

    fn pair() -> Vec<Contact> {
        vec![
            Contact::new("Jane", "Roe", "555", "jane@x.com"),
            Contact::new("Jane", "Doe", "666", "jane2@x.com"),
        ]
    }

    #[test]
    fn parses_one_based_choice() -> Result<(), AppError> {
        assert_eq!(parse_choice("1", 2)?, 0);
        assert_eq!(parse_choice(" 2 ", 2)?, 1);
        Ok(())
    }

    #[test]
    fn refuses_out_of_range_and_garbage() {
        assert!(matches!(parse_choice("0", 2), Err(AppError::Selection(_))));
        assert!(matches!(parse_choice("3", 2), Err(AppError::Selection(_))));
        assert!(matches!(parse_choice("-1", 2), Err(AppError::Selection(_))));
        assert!(matches!(parse_choice("two", 2), Err(AppError::Selection(_))));
        assert!(matches!(parse_choice("", 2), Err(AppError::Selection(_))));
    }

    #[test]
    fn single_result_is_selected_without_asking() {
        let book = pair();
        let results = vec![&book[0]];
        let mut source = Scripted::new(&[]);

        assert_eq!(select(&results, &mut source), Some(0));
        assert_eq!(source.presented, 0);
    }

    #[test]
    fn empty_results_select_nothing() {
        let mut source = Scripted::new(&["1"]);

        assert_eq!(select(&[], &mut source), None);
    }

    #[test]
    fn reprompts_until_valid() {
        let book = pair();
        let results: Vec<&Contact> = book.iter().collect();
        let mut source = Scripted::new(&["abc", "5", "2"]);

        assert_eq!(select(&results, &mut source), Some(1));
        assert_eq!(source.presented, 2);
        assert_eq!(source.rejections, 2);
    }

    #[test]
    fn exhausted_source_selects_nothing() {
        let book = pair();
        let results: Vec<&Contact> = book.iter().collect();
        let mut source = Scripted::new(&["9"]);

        assert_eq!(select(&results, &mut source), None);
        assert_eq!(source.rejections, 1);
    }
}
