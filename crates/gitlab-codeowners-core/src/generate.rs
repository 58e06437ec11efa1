//! Random CODEOWNERS file generation for benchmarking and testing.
//!
//! Files are built from the document types and serialized, so the output
//! always parses back into the same document.

use crate::matching::Pattern;
use crate::parse::{CodeownersFile, Rule, Section};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Configuration for generating CODEOWNERS files.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of rule lines to generate.
    pub num_rules: usize,
    /// Maximum number of named sections after the unnamed one.
    pub num_sections: usize,
    /// Maximum owners per rule (1-4 typical).
    pub max_owners_per_rule: usize,
    /// Seed for deterministic generation.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_rules: 100,
            num_sections: 10,
            max_owners_per_rule: 4,
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with specified rules and proportional sections.
    ///
    /// Sections are set to ~10% of rules.
    pub fn new(num_rules: usize) -> Self {
        Self {
            num_rules,
            num_sections: num_rules / 10,
            ..Default::default()
        }
    }

    /// Small fixture (~10 rules).
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Medium fixture (~100 rules).
    pub fn medium() -> Self {
        Self::new(100)
    }

    /// Large fixture (~1000 rules).
    pub fn large() -> Self {
        Self::new(1_000)
    }

    /// Extra large fixture (~10k rules).
    pub fn xlarge() -> Self {
        Self::new(10_000)
    }

    /// Generate a file targeting approximately the given byte size.
    ///
    /// Actual size varies based on pattern/owner complexity.
    pub fn target_bytes(bytes: usize) -> Self {
        // Average line is ~40 bytes
        Self::new(bytes.saturating_div(40).max(1))
    }

    /// Set the random seed for deterministic generation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of sections explicitly.
    pub fn with_sections(mut self, num_sections: usize) -> Self {
        self.num_sections = num_sections;
        self
    }

    /// Set the maximum owners per rule.
    pub fn with_max_owners(mut self, max: usize) -> Self {
        self.max_owners_per_rule = max.max(1);
        self
    }
}

mod vocabulary {
    pub const PATTERN_TEMPLATES: &[&str] = &[
        "*.{ext}",
        "**/*.{ext}",
        "{dir}/",
        "/{dir}/",
        "/{dir}/**",
        "/{dir}/*.{ext}",
        "/src/{dir}/",
        "/src/**/*.{ext}",
        "/{dir}/**/test_*.{ext}",
        "docs/**/*.md",
        "README.md",
    ];

    pub const EXTENSIONS: &[&str] = &["rs", "py", "js", "ts", "go", "md", "yaml", "json", "toml"];
    pub const DIRECTORIES: &[&str] = &[
        "src", "lib", "tests", "docs", "config", "scripts", "api", "core",
    ];
    pub const USERNAMES: &[&str] = &["alice", "bob", "charlie", "dev", "maintainer", "reviewer"];
    pub const GROUPS: &[&str] = &["acme", "gitlab-org", "myorg"];
    pub const SUBGROUPS: &[&str] = &["core", "platform", "frontend", "backend", "infra", "docs"];
    pub const SECTION_NAMES: &[&str] = &[
        "Frontend",
        "Backend",
        "Infrastructure",
        "Documentation",
        "Database",
        "Security",
    ];
}

/// Owner type distribution weights (must sum to 100).
const WEIGHT_USER: u32 = 50;
const WEIGHT_GROUP: u32 = 30;
// Remaining weight (20) goes to email

/// Probability of starting a new section before a rule (percentage).
const SECTION_PROBABILITY: u32 = 10;
/// Probability of a section being optional (percentage).
const OPTIONAL_PROBABILITY: u32 = 20;
/// Probability of a section declaring default owners (percentage).
const DEFAULT_OWNERS_PROBABILITY: u32 = 50;
/// Probability of a rule relying on its section's default owners (percentage).
const INHERIT_OWNERS_PROBABILITY: u32 = 40;

/// Generates a random CODEOWNERS document based on configuration.
pub fn generate_file(config: &GeneratorConfig) -> CodeownersFile {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut sections = Vec::with_capacity(config.num_sections + 1);
    let mut current = Section::unnamed();

    for rules_added in 0..config.num_rules {
        if sections.len() < config.num_sections
            && rules_added > 0
            && rng.random_ratio(SECTION_PROBABILITY, 100)
        {
            let next = generate_section(&mut rng, config, sections.len() + 1);
            sections.push(std::mem::replace(&mut current, next));
        }

        let owners = if !current.default_owners.is_empty()
            && rng.random_ratio(INHERIT_OWNERS_PROBABILITY, 100)
        {
            Vec::new()
        } else {
            generate_owners(&mut rng, config)
        };
        current
            .rules
            .push(Rule::new(generate_pattern(&mut rng), owners));
    }

    sections.push(current);
    sections.into_iter().collect()
}

fn generate_section(rng: &mut StdRng, config: &GeneratorConfig, index: usize) -> Section {
    use vocabulary::SECTION_NAMES;

    let name = format!(
        "{} {}",
        SECTION_NAMES[rng.random_range(0..SECTION_NAMES.len())],
        index
    );
    let required_approvals = if rng.random_ratio(OPTIONAL_PROBABILITY, 100) {
        0
    } else {
        rng.random_range(1..=3)
    };
    let default_owners = if rng.random_ratio(DEFAULT_OWNERS_PROBABILITY, 100) {
        generate_owners(rng, config)
    } else {
        Vec::new()
    };

    Section::new(name, required_approvals, default_owners)
}

fn generate_pattern(rng: &mut StdRng) -> Pattern {
    use vocabulary::*;

    let template = PATTERN_TEMPLATES[rng.random_range(0..PATTERN_TEMPLATES.len())];
    let ext = EXTENSIONS[rng.random_range(0..EXTENSIONS.len())];
    let dir = DIRECTORIES[rng.random_range(0..DIRECTORIES.len())];
    Pattern::new(template.replace("{ext}", ext).replace("{dir}", dir))
}

fn generate_owners(rng: &mut StdRng, config: &GeneratorConfig) -> Vec<String> {
    let num_owners = rng.random_range(1..=config.max_owners_per_rule.max(1));
    (0..num_owners).map(|_| generate_owner(rng)).collect()
}

/// Generate a random owner based on weighted distribution.
fn generate_owner(rng: &mut StdRng) -> String {
    use vocabulary::*;

    let roll = rng.random_range(0..100);

    if roll < WEIGHT_USER {
        format!("@{}", USERNAMES[rng.random_range(0..USERNAMES.len())])
    } else if roll < WEIGHT_USER + WEIGHT_GROUP {
        format!(
            "@{}/{}",
            GROUPS[rng.random_range(0..GROUPS.len())],
            SUBGROUPS[rng.random_range(0..SUBGROUPS.len())]
        )
    } else {
        format!(
            "{}@example.com",
            USERNAMES[rng.random_range(0..USERNAMES.len())]
        )
    }
}

/// Generates a CODEOWNERS file as a string.
pub fn generate(config: &GeneratorConfig) -> String {
    format!(
        "# Auto-generated CODEOWNERS for benchmarking\n\n{}",
        generate_file(config)
    )
}
