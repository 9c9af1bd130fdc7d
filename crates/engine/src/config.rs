use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    #[builder(default = "vec![PathBuf::from(\".\")]")]
    pub roots: Vec<PathBuf>,
    #[builder(default = "true")]
    pub follow_links: bool,
    #[builder(default)]
    pub max_depth: Option<usize>,
    /// Honour `.gitignore`/`.ignore` files and skip hidden entries.
    #[builder(default)]
    pub git_ignore: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            roots: vec![PathBuf::from(".")],
            follow_links: true,
            max_depth: None,
            git_ignore: false,
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub walk: WalkOptions,

    /// Number of counting threads. `0` means one per logical CPU.
    #[builder(default = "1")]
    pub threads: usize,

    /// Abort on the first unreadable file instead of skipping it.
    #[builder(default = "true")]
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            walk: WalkOptions::default(),
            threads: 1,
            strict: true,
        }
    }
}

impl Config {
    /// Resolved number of counting threads.
    #[must_use]
    pub fn effective_threads(&self) -> usize {
        if self.threads == 0 {
            num_cpus::get()
        } else {
            self.threads
        }
    }
}
