/// The navigation primitive guards drive their redirects through.
///
/// A normal navigation appends an entry with `push`; every guard redirect
/// goes through `replace` so the guarded route never stays on the stack as
/// a back target.
pub trait Navigator {
    fn push(&mut self, path: &str);
    fn replace(&mut self, path: &str);
    fn current(&self) -> Option<&str>;
}

/// In-memory history stack.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Navigator for History {
    fn push(&mut self, path: &str) {
        self.entries.push(path.to_string());
    }

    fn replace(&mut self, path: &str) {
        match self.entries.last_mut() {
            Some(last) => *last = path.to_string(),
            None => self.entries.push(path.to_string()),
        }
    }

    fn current(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }
}
