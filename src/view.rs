use crate::error::LookupError;
use crate::github::UserProfile;

/// Rendering seam between the lookup flow and whatever hosts it.
///
/// `show_loading` marks the start of an attempt; exactly one of
/// `show_result` / `show_error` ends it.
pub trait View {
    fn show_loading(&mut self, username: &str);

    /// Render a profile. `created` is the normalized `YYYY-MM-DD` creation
    /// date (already UTC-normalized by the caller).
    fn show_result(&mut self, profile: &UserProfile, created: &str);

    fn show_error(&mut self, error: &LookupError);
}

/// Plain-text view: the profile card goes to stdout, busy and error text to
/// stderr so piped output stays clean.
pub struct TerminalView;

impl TerminalView {
    pub fn new() -> Self {
        Self
    }
}

impl View for TerminalView {
    fn show_loading(&mut self, username: &str) {
        eprintln!("Fetching {username}...");
    }

    fn show_result(&mut self, profile: &UserProfile, created: &str) {
        println!("{} (@{})", profile.display_name, profile.login);
        println!("Created:  {created}");
        if let Some(ref bio) = profile.bio {
            println!("Bio:      {bio}");
        }
        println!("Avatar:   {}", profile.avatar_url);
        println!("Profile:  {}", profile.profile_url);
    }

    fn show_error(&mut self, error: &LookupError) {
        eprintln!("{error}");
    }
}
