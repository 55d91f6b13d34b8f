use std::sync::Arc;

use rand::Rng;

pub const BASIC_COMMANDS: &[&str] = &[
    "ls -l",
    "pwd",
    "whoami",
    "date",
    "uname -a",
    "uptime",
    "df -h",
    "free -m",
    "ps aux",
    "hostname",
];

// Repeated entries are kept on purpose, they weigh the draw.
pub const EXTENDED_COMMANDS: &[&str] = &[
    "ls -l",
    "pwd",
    "whoami",
    "date",
    "uname -a",
    "uptime",
    "df -h",
    "free -m",
    "ps aux",
    "hostname",
    "id",
    "who",
    "w",
    "top -b -n1",
    "netstat -tunlp",
    "dmesg | tail",
    "vmstat",
    "iostat",
    "lscpu",
    "lsblk",
    "uptime",
    "uname -r",
    "uname -m",
    "whoami",
    "groups",
    "cat /etc/os-release",
    "lsof -i",
    "ss -tuln",
    "ip a",
    "ip r",
    "traceroute google.com",
    "ping -c 1 8.8.8.8",
    "curl -I https://google.com",
    "head -n 5 /etc/passwd",
    "tail -n 5 /etc/passwd",
    "du -sh /tmp",
    "df -i",
    "find /tmp -type f | wc -l",
    "history | tail -n 5",
    "uptime -p",
];

/// Immutable list of command lines shared by every worker.
///
/// Cloning is cheap: all clones point at the same backing slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    commands: Arc<[String]>,
}

impl Catalog {
    pub fn new<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            commands: commands.into_iter().map(Into::into).collect(),
        }
    }

    pub fn basic() -> Self {
        Self::new(BASIC_COMMANDS.iter().copied())
    }

    pub fn extended() -> Self {
        Self::new(EXTENDED_COMMANDS.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn contains(&self, command: &str) -> bool {
        self.commands.iter().any(|c| c == command)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(String::as_str)
    }

    /// Uniform pick. Panics on an empty catalog, which `BlastConfig::validate`
    /// rules out before any worker starts.
    pub(crate) fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let index = rng.random_range(0..self.commands.len());
        &self.commands[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn builtin_catalog_sizes() {
        assert_eq!(Catalog::basic().len(), 10);
        assert_eq!(Catalog::extended().len(), 40);
    }

    #[test]
    fn extended_keeps_duplicates() {
        let catalog = Catalog::extended();
        let uptime = catalog.iter().filter(|c| *c == "uptime").count();
        assert_eq!(uptime, 2);
    }

    #[test]
    fn pick_stays_in_catalog_and_covers_it() {
        let catalog = Catalog::basic();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashSet::new();
        for _ in 0..2_000 {
            let command = catalog.pick(&mut rng);
            assert!(catalog.contains(command));
            seen.insert(command.to_string());
        }
        assert_eq!(seen.len(), catalog.len());
    }

    #[test]
    fn clones_share_storage() {
        let a = Catalog::new(["pwd", "date"]);
        let b = a.clone();
        assert!(Arc::ptr_eq(&a.commands, &b.commands));
        assert_eq!(b.iter().collect::<Vec<_>>(), vec!["pwd", "date"]);
    }
}
