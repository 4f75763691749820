use crate::date;
use crate::github::{GithubClient, LookupRequest, UserProfile};
use crate::view::View;
use std::io::{self, BufRead, Write};

/// Run a single lookup attempt end to end: validate the submission, signal
/// loading, fetch, normalize the creation date, and hand exactly one
/// terminal outcome to the view. Returns `true` on success.
pub fn run_attempt(client: &GithubClient, view: &mut dyn View, raw_username: &str) -> bool {
    let request = match LookupRequest::new(raw_username) {
        Ok(request) => request,
        Err(err) => {
            // Local validation failure; no loading state, no network call.
            view.show_error(&err);
            return false;
        }
    };

    view.show_loading(request.username());

    match client.fetch_user(&request) {
        Ok(profile) => {
            let created = created_for_display(&profile);
            view.show_result(&profile, &created);
            true
        }
        Err(err) => {
            view.show_error(&err);
            false
        }
    }
}

/// Normalize the creation timestamp for display. Presence is guaranteed by
/// the executor; an unparseable value falls back to the raw string.
fn created_for_display(profile: &UserProfile) -> String {
    date::format_date_utc(&profile.created_at).unwrap_or_else(|| profile.created_at.clone())
}

/// Look up each username in turn. Attempts are strictly sequential: the
/// next one starts only after the previous outcome has been rendered.
pub fn run_all(client: &GithubClient, view: &mut dyn View, usernames: &[String]) -> bool {
    let mut all_ok = true;

    for username in usernames {
        if !run_attempt(client, view, username) {
            all_ok = false;
        }
    }

    all_ok
}

/// Interactive loop: one username per line until EOF. Each line is a
/// complete attempt, so submissions can never overlap.
pub fn run_interactive(client: &GithubClient, view: &mut dyn View) -> io::Result<()> {
    let stdin = io::stdin();

    loop {
        eprint!("username> ");
        io::stderr().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        run_attempt(client, view, &line);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GithubConfig;
    use crate::error::LookupError;

    #[derive(Debug, PartialEq, Eq)]
    enum Event {
        Loading(String),
        Result(String),
        Error(LookupError),
    }

    #[derive(Default)]
    struct RecordingView {
        events: Vec<Event>,
    }

    impl View for RecordingView {
        fn show_loading(&mut self, username: &str) {
            self.events.push(Event::Loading(username.to_string()));
        }

        fn show_result(&mut self, _profile: &UserProfile, created: &str) {
            self.events.push(Event::Result(created.to_string()));
        }

        fn show_error(&mut self, error: &LookupError) {
            self.events.push(Event::Error(error.clone()));
        }
    }

    fn unreachable_client() -> GithubClient {
        // Nothing listens on this port.
        GithubClient::new(&GithubConfig {
            token: None,
            api_base: "http://127.0.0.1:9".into(),
            timeout_seconds: 5,
        })
    }

    fn profile(created_at: &str) -> UserProfile {
        UserProfile {
            display_name: "The Octocat".into(),
            login: "octocat".into(),
            avatar_url: "https://avatars.example/octocat.png".into(),
            bio: None,
            profile_url: "https://github.com/octocat".into(),
            created_at: created_at.into(),
        }
    }

    #[test]
    fn empty_submission_is_one_error_with_no_loading() {
        let client = unreachable_client();
        let mut view = RecordingView::default();

        let ok = run_attempt(&client, &mut view, "   ");

        assert!(!ok);
        assert_eq!(view.events, vec![Event::Error(LookupError::EmptyUsername)]);
    }

    #[test]
    fn failed_fetch_is_loading_then_one_error() {
        let client = unreachable_client();
        let mut view = RecordingView::default();

        let ok = run_attempt(&client, &mut view, " octocat ");

        assert!(!ok);
        assert_eq!(
            view.events,
            vec![
                Event::Loading("octocat".into()),
                Event::Error(LookupError::Network),
            ]
        );
    }

    #[test]
    fn run_all_keeps_going_after_a_failure() {
        let client = unreachable_client();
        let mut view = RecordingView::default();

        let ok = run_all(&client, &mut view, &["".into(), " ".into()]);

        assert!(!ok);
        assert_eq!(view.events.len(), 2);
    }

    #[test]
    fn created_date_is_normalized_for_display() {
        assert_eq!(
            created_for_display(&profile("2011-01-25T18:44:36Z")),
            "2011-01-25"
        );
    }

    #[test]
    fn unparseable_created_falls_back_to_raw() {
        assert_eq!(
            created_for_display(&profile("soon after the big bang")),
            "soon after the big bang"
        );
    }
}
