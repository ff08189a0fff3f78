//! # Sentence collector
//!
//! Collects sentences for a crowd-sourced speech corpus from raw text.
//!
//! ## Getting started
//!
//! ```sh
//! sentence-collector 0.1.0
//! Sentence collection tool for speech corpora.
//!
//! USAGE:
//!     sentence-collector <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     check     Segment and filter sentences without submitting them
//!     help      Prints this message or the help of the given subcommand(s)
//!     submit    Segment, filter, review and submit sentences
//!     train     Train a sentence boundary model
//! ```
//!
use std::fs::File;
use std::io;

use itertools::Itertools;
use structopt::StructOpt;

use sentence_collector::error::Error;
use sentence_collector::lang::Lang;
use sentence_collector::pipeline::Collector;
use sentence_collector::remote::{
    CorpusStore, HttpCorpusStore, HttpEndpoint, MemoryCorpusStore, MemorySubmissionEndpoint,
    SubmissionEndpoint,
};
use sentence_collector::review::ReviewSession;
use sentence_collector::segmentation::{
    CrossChecked, PunktParameters, PunktSegmenter, PunktTrainer, RuleSegmenter,
    SentenceSegmenter, ENGLISH,
};
use sentence_collector::state::{PipelineState, Pool, ReviewSource};

#[macro_use]
extern crate log;

mod cli;
mod interactive;

/// Boundary model given with `--model`, if any.
fn model(collect: &cli::Collect) -> Result<Option<PunktParameters>, Error> {
    collect
        .model
        .as_ref()
        .map(|path| PunktParameters::from_reader(File::open(path)?))
        .transpose()
}

fn segmenter(params: &PunktParameters, cross_check: bool) -> Box<dyn SentenceSegmenter + '_> {
    let primary = PunktSegmenter::new(params);
    if cross_check {
        Box::new(CrossChecked::new(primary, RuleSegmenter))
    } else {
        Box::new(primary)
    }
}

/// Load text from `collect.src` into a new collector.
async fn collect<'p, C, E>(
    collect: &cli::Collect,
    params: &'p PunktParameters,
    store: C,
    endpoint: E,
) -> Result<Collector<'p, C, E>, Error>
where
    C: CorpusStore,
    E: SubmissionEndpoint,
{
    let raw = std::fs::read_to_string(&collect.src)?;
    let mut collector = Collector::with_segmenter(
        store,
        endpoint,
        segmenter(params, !collect.no_cross_check),
        collect.config(),
    );
    collector.add(&collect.lang, &raw).await?;
    Ok(collector)
}

fn report(state: &PipelineState) {
    for (name, pool) in [
        ("unreviewed", Pool::Unreviewed),
        ("validated", Pool::Validated),
        ("invalidated", Pool::Invalidated),
        ("too long", Pool::Filtered),
        ("already known", Pool::Existing),
    ] {
        let sentences = state.pool(pool);
        if sentences.is_empty() {
            continue;
        }
        println!("{name} ({}):", sentences.len());
        println!("{}", sentences.iter().map(|s| format!("  {s}")).join("\n"));
    }
    println!("ready for submission: {}", state.ready().len());
}

/// Review the unreviewed sentences.
///
/// Completing a review replaces the unreviewed pool, so filtered sentences are not offered here.
fn review<C, E>(collector: &mut Collector<'_, C, E>) -> Result<(), Error>
where
    C: CorpusStore,
    E: SubmissionEndpoint,
{
    let token = match collector.start_review(ReviewSource::Unreviewed)? {
        Some(token) => token,
        None => return Ok(()),
    };
    let mut session = ReviewSession::new(collector.state().pool(Pool::Reviewing));
    let decided = interactive::review(&mut session, io::stdin().lock(), io::stdout())?;
    debug!("{decided} decisions taken");
    collector.complete_review(&token, &session.finish())?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::SentenceCollector::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::SentenceCollector::Check(c) => {
            let custom = model(&c.collect)?;
            let params = custom.as_ref().unwrap_or(&*ENGLISH);
            let store = MemoryCorpusStore::new();
            if let Some(path) = &c.existing {
                let lang = Lang::new(&c.collect.lang)?;
                store.insert(&lang, cli::read_lines(path)?)?;
            }
            let collector = collect(
                &c.collect,
                params,
                store,
                MemorySubmissionEndpoint::default(),
            )
            .await?;
            report(collector.state());
        }

        cli::SentenceCollector::Submit(s) => {
            let custom = model(&s.collect)?;
            let params = custom.as_ref().unwrap_or(&*ENGLISH);
            let credentials = s.credentials();
            let store = HttpCorpusStore::new(&s.server, credentials.clone())?;
            let endpoint = HttpEndpoint::new(&s.server, credentials)?;
            let mut collector = collect(&s.collect, params, store, endpoint).await?;
            if s.review {
                review(&mut collector)?;
            }
            report(collector.state());

            let ready = collector.state().ready().len();
            if ready == 0 {
                println!("nothing to submit");
                return Ok(());
            }
            let question = format!("Submit {ready} sentences?");
            if !s.yes && !interactive::confirm(&question, io::stdin().lock(), io::stdout())? {
                collector.cancel();
                println!("nothing submitted");
                return Ok(());
            }

            let summary = collector.confirm().await?;
            if let Some(message) = summary.message() {
                println!("{message}");
            }
            if let Some(message) = summary.error_message() {
                warn!("{message}");
            }
        }

        cli::SentenceCollector::Train(t) => {
            let text = std::fs::read_to_string(&t.src)?;
            let mut trainer = PunktTrainer::new();
            trainer.train(&text);
            let params = trainer.into_params();
            info!(
                "learnt {} abbreviations: {}",
                params.abbrev_types().len(),
                params.abbrev_types().iter().join(", ")
            );
            params.to_writer(File::create(&t.dst)?)?;
        }
    };
    Ok(())
}
