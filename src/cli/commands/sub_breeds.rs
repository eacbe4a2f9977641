//! Sub-breed lookup CLI command.

use anyhow::Result;
use clap::Args;
use comfy_table::{Attribute, Cell};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::adapters::{CachingBreedProvider, DogApiBreedProvider, StaticBreedProvider};
use crate::cli::output::{base_table, output, CommandOutput};
use crate::domain::models::{Config, SubBreedList};
use crate::domain::ports::BreedProvider;

#[derive(Args, Debug)]
pub struct SubBreedsArgs {
    /// Breed names, looked up in order through one cache
    #[arg(required = true)]
    pub breeds: Vec<String>,

    /// Answer from a YAML fixture (breed: [sub-breeds]) instead of the API
    #[arg(short, long)]
    pub fixture: Option<PathBuf>,
}

/// Where a lookup result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupSource {
    /// The wrapped provider was called
    Upstream,
    /// Served from the cache
    Cache,
    /// Rejected before reaching the cache
    Skipped,
}

impl LookupSource {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upstream => "upstream",
            Self::Cache => "cache",
            Self::Skipped => "skipped",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LookupOutput {
    pub breed: String,
    pub source: LookupSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_breeds: Option<SubBreedList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubBreedsOutput {
    pub lookups: Vec<LookupOutput>,
    pub calls_made: u64,
    pub failed: usize,
}

impl CommandOutput for SubBreedsOutput {
    fn to_human(&self) -> String {
        let mut table = base_table();
        table.set_header(vec![
            Cell::new("Breed").add_attribute(Attribute::Bold),
            Cell::new("Sub-breeds").add_attribute(Attribute::Bold),
            Cell::new("Source").add_attribute(Attribute::Bold),
        ]);

        for lookup in &self.lookups {
            let sub_breeds = match (&lookup.sub_breeds, &lookup.error) {
                (Some(subs), _) if subs.is_empty() => "(none)".to_string(),
                (Some(subs), _) => subs.join(", "),
                (None, Some(err)) => err.clone(),
                (None, None) => String::new(),
            };
            table.add_row(vec![
                Cell::new(&lookup.breed),
                Cell::new(sub_breeds),
                Cell::new(lookup.source.as_str()),
            ]);
        }

        format!("{table}\nUpstream calls made: {}", self.calls_made)
    }
}

/// Look up every breed in order through `provider`.
pub async fn lookup_all<P>(provider: &CachingBreedProvider<P>, breeds: &[String]) -> SubBreedsOutput
where
    P: BreedProvider + ?Sized,
{
    let mut lookups = Vec::with_capacity(breeds.len());

    for breed in breeds {
        let calls_before = provider.calls_made();
        let result = provider.get_sub_breeds(breed).await;
        let source = if provider.calls_made() > calls_before {
            LookupSource::Upstream
        } else if result.is_ok() {
            LookupSource::Cache
        } else {
            LookupSource::Skipped
        };

        let (sub_breeds, error) = match result {
            Ok(subs) => (Some(subs), None),
            Err(err) => (None, Some(err.to_string())),
        };
        lookups.push(LookupOutput {
            breed: breed.clone(),
            source,
            sub_breeds,
            error,
        });
    }

    let failed = lookups.iter().filter(|l| l.error.is_some()).count();
    SubBreedsOutput {
        lookups,
        calls_made: provider.calls_made(),
        failed,
    }
}

pub async fn execute(args: SubBreedsArgs, config: &Config, json_mode: bool) -> Result<()> {
    let leaf: Arc<dyn BreedProvider> = match args.fixture {
        Some(path) => Arc::new(StaticBreedProvider::from_yaml_file(path)?),
        None => Arc::new(DogApiBreedProvider::new(&config.api)?),
    };
    let provider = CachingBreedProvider::new(leaf);

    let result = lookup_all(&provider, &args.breeds).await;
    info!(
        breeds = result.lookups.len(),
        failed = result.failed,
        calls_made = result.calls_made,
        "sub-breed lookups finished"
    );
    output(&result, json_mode);

    if result.failed > 0 {
        anyhow::bail!("{} of {} lookups failed", result.failed, result.lookups.len());
    }
    Ok(())
}
