use std::sync::Arc;

use crate::animations::Animation;
use crate::animations::{
    alignment::{Guardrail, Rlhf},
    generation::{Decoding, Revision, Temperature, Weaving},
    infrastructure::{Context, Energy, Tokenizer},
    multimodal::{ImageGen, Vision, Voice},
    reasoning::{Analogy, Attention, BeamSearch, ChainOfThought, Thinking},
    retrieval::{Embedding, Indexing, Rag},
    speculative::{
        Emergence, Forgetting, Hallucination, InnerMonologue, Polyglot, Superposition,
    },
};
use crate::catalog::entries::builtin_entries;
use crate::catalog::model::Catalog;
use crate::foundation::error::LoopreelResult;
use crate::library::registry::Registry;

fn entry(
    key: &'static str,
    animation: impl Animation + 'static,
) -> (&'static str, Arc<dyn Animation>) {
    (key, Arc::new(animation))
}

fn builtin_renderers() -> Vec<(&'static str, Arc<dyn Animation>)> {
    vec![
        entry("indexing", Indexing),
        entry("embedding", Embedding),
        entry("rag", Rag),
        entry("thinking", Thinking),
        entry("attention", Attention),
        entry("beamSearch", BeamSearch),
        entry("chainOfThought", ChainOfThought),
        entry("analogy", Analogy),
        entry("revision", Revision),
        entry("decoding", Decoding),
        entry("temperature", Temperature),
        entry("weaving", Weaving),
        entry("context", Context),
        entry("energy", Energy),
        entry("tokenizer", Tokenizer),
        entry("imageGen", ImageGen),
        entry("voice", Voice),
        entry("vision", Vision),
        entry("guardrail", Guardrail),
        entry("rlhf", Rlhf),
        entry("superposition", Superposition),
        entry("forgetting", Forgetting),
        entry("hallucination", Hallucination),
        entry("emergence", Emergence),
        entry("innerMonologue", InnerMonologue),
        entry("polyglot", Polyglot),
    ]
}

pub(crate) fn builtin_catalog() -> LoopreelResult<Catalog> {
    Catalog::new(builtin_entries())
}

pub(crate) fn builtin_registry() -> LoopreelResult<Registry> {
    let mut registry = Registry::new();
    for (key, animation) in builtin_renderers() {
        registry.register(key, animation)?;
    }
    Ok(registry)
}
