use crc32fast::Hasher;

/// Derive a stable seed for block ids from a page identifier using CRC32
pub fn page_seed(page_id: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(page_id.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential id generator for blocks within one editing session
///
/// Ids are `{seed}-{n}` with a monotonically increasing counter, so an id
/// handed out once is never handed out again for the same generator.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(page_id: &str) -> Self {
        Self {
            seed: page_seed(page_id),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate the next sequential id
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    /// Get the seed this generator derives ids from
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Advance the counter past any `{seed}-{n}` ids already in use
    ///
    /// A reopened page may contain ids minted by an earlier session with the
    /// same seed; without this the counter would restart at 1 and collide.
    pub fn skip_past<'a>(&mut self, existing: impl IntoIterator<Item = &'a str>) {
        let prefix = format!("{}-", self.seed);
        for id in existing {
            if let Some(suffix) = id.strip_prefix(&prefix) {
                if let Ok(n) = suffix.parse::<u32>() {
                    self.count = self.count.max(n);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_seed_is_stable() {
        let a = page_seed("pages/home");
        let b = page_seed("pages/home");
        assert_eq!(a, b);

        let c = page_seed("pages/contact");
        assert_ne!(a, c);
    }

    #[test]
    fn test_sequential_ids_never_repeat() {
        let mut generator = IdGenerator::new("pages/home");

        let id1 = generator.new_id();
        let id2 = generator.new_id();
        let id3 = generator.new_id();

        assert!(id1.ends_with("-1"));
        assert!(id2.ends_with("-2"));
        assert!(id3.ends_with("-3"));

        let seed = generator.seed();
        assert!(id1.starts_with(seed));
        assert!(id2.starts_with(seed));
        assert!(id3.starts_with(seed));
    }

    #[test]
    fn test_skip_past_resumes_after_existing_ids() {
        let mut generator = IdGenerator::new("pages/home");
        let seed = generator.seed().to_string();

        generator.skip_past([
            format!("{seed}-7").as_str(),
            format!("{seed}-3").as_str(),
            "other-seed-99",
            "not-an-id",
        ]);

        assert_eq!(generator.new_id(), format!("{seed}-8"));
    }
}
