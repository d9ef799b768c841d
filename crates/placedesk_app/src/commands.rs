use placedesk_core::{Msg, SortKey};

/// One parsed line of terminal input.
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
    Unknown(String),
}

pub fn parse(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "jobs" | "refresh" => Command::Dispatch(Msg::JobsRequested),
        "open" if !rest.is_empty() => Command::Dispatch(Msg::JobOpened {
            job_id: rest.to_string(),
        }),
        // `search` with no argument clears the term.
        "search" => Command::Dispatch(Msg::SearchChanged(rest.to_string())),
        "rating" => match rest {
            "off" | "" => Command::Dispatch(Msg::MinRatingChanged(None)),
            value => match value.parse::<f64>() {
                Ok(min) => Command::Dispatch(Msg::MinRatingChanged(Some(min))),
                Err(_) => Command::Unknown(format!("not a rating: {value}")),
            },
        },
        "pending" => match rest {
            "on" => Command::Dispatch(Msg::OnlyNotContactedToggled(true)),
            "off" => Command::Dispatch(Msg::OnlyNotContactedToggled(false)),
            other => Command::Unknown(format!("pending takes on|off, got {other:?}")),
        },
        "sort" => match rest {
            "name" => Command::Dispatch(Msg::SortChanged(SortKey::NameAsc)),
            "name-desc" => Command::Dispatch(Msg::SortChanged(SortKey::NameDesc)),
            "rating" => Command::Dispatch(Msg::SortChanged(SortKey::RatingDesc)),
            "rating-asc" => Command::Dispatch(Msg::SortChanged(SortKey::RatingAsc)),
            other => Command::Unknown(format!("unknown sort key {other:?}")),
        },
        "contact" => match rest.split_once(char::is_whitespace) {
            Some((place_id, "on")) => Command::Dispatch(Msg::ContactToggled {
                place_id: place_id.to_string(),
                contacted: true,
            }),
            Some((place_id, "off")) => Command::Dispatch(Msg::ContactToggled {
                place_id: place_id.to_string(),
                contacted: false,
            }),
            _ => Command::Unknown("contact takes <place_id> on|off".to_string()),
        },
        "export" => Command::Dispatch(Msg::ExportRequested),
        "delete" if !rest.is_empty() => Command::Dispatch(Msg::JobDeleteRequested {
            job_id: rest.to_string(),
        }),
        "dismiss" => Command::Dispatch(Msg::NoticeDismissed),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => Command::Unknown(format!("unknown command {other:?}")),
    };
    Some(command)
}

pub const HELP: &str = "\
commands:
  jobs                  reload the saved-jobs list
  open <job_id>         open a job's results
  search [term]         set or clear the free-text filter
  rating <min>|off      set or clear the minimum-rating filter
  pending on|off        show only not-yet-contacted places
  sort name|name-desc|rating|rating-asc
  contact <place_id> on|off
  export                write the visible rows as CSV (exports/)
  delete <job_id>       delete a saved job
  dismiss               clear the notice line
  quit";
