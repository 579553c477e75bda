use crate::catalog::category::Category::{self, *};
use crate::catalog::model::CatalogEntry;

type Row = (&'static str, &'static str, Category, &'static str, bool, &'static str);

const BUILTIN: &[Row] = &[
    (
        "indexing",
        "Indexing",
        Retrieval,
        "IDX",
        true,
        "Sequential scan over stored knowledge blocks. Each block is checked for relevance via approximate nearest-neighbor lookup, returning top-k matches.",
    ),
    (
        "embedding",
        "Embedding Space",
        Retrieval,
        "EMB",
        false,
        "Input tokens projected into a high-dimensional vector space (d=768+). Semantically related tokens cluster; distance encodes similarity.",
    ),
    (
        "rag",
        "Retrieval-Augmented Generation",
        Retrieval,
        "RAG",
        true,
        "External documents retrieved at inference time via dense passage retrieval. Retrieved context is prepended to the prompt before generation.",
    ),
    (
        "thinking",
        "Chain Activation",
        Reasoning,
        "CHN",
        false,
        "Sequential node activation across a directed graph. Each node represents an intermediate computation; edges encode dependencies between reasoning steps.",
    ),
    (
        "attention",
        "Self-Attention Matrix",
        Reasoning,
        "ATT",
        false,
        "Pairwise attention weights between all tokens in a sequence. Each cell shows how much token i attends to token j. Multi-head: 12-96 parallel heads per layer.",
    ),
    (
        "beamSearch",
        "Beam Search",
        Reasoning,
        "BSR",
        true,
        "Parallel exploration of k candidate sequences. At each step, only the top-k scoring beams survive. Low-probability branches are pruned.",
    ),
    (
        "chainOfThought",
        "Chain-of-Thought",
        Reasoning,
        "CoT",
        true,
        "Explicit intermediate reasoning steps generated before the final answer. Each step conditions on all prior steps. Improves accuracy on multi-step problems.",
    ),
    (
        "analogy",
        "Structural Mapping",
        Reasoning,
        "MAP",
        true,
        "Cross-domain transfer via relational alignment. The model maps structure (not surface features) from a source domain to a target domain: A:B :: C:D.",
    ),
    (
        "revision",
        "Iterative Refinement",
        Generation,
        "REV",
        false,
        "Multiple editing passes over a draft. Each pass applies deletions, substitutions, and insertions. Output converges toward target quality.",
    ),
    (
        "decoding",
        "Autoregressive Decoding",
        Generation,
        "DEC",
        false,
        "Tokens generated left-to-right. At each position, a probability distribution over the full vocabulary is computed; one token is sampled.",
    ),
    (
        "temperature",
        "Temperature Sampling",
        Generation,
        "TMP",
        false,
        "Logits divided by temperature T before softmax. T→0: argmax (deterministic). T→∞: uniform (random). Controls the entropy of the output distribution.",
    ),
    (
        "weaving",
        "Syntax-Semantics Interleave",
        Generation,
        "WVE",
        true,
        "Syntactic structure (grammar) and semantic content (meaning) are generated in alternation. Each constrains the other at every position.",
    ),
    (
        "context",
        "Context Window",
        Infrastructure,
        "CTX",
        false,
        "Fixed-length token buffer (e.g. 128k tokens). Partitioned across system prompt, conversation history, retrieval, and generation. Overflow causes truncation.",
    ),
    (
        "energy",
        "Inference Cost",
        Infrastructure,
        "NRG",
        true,
        "GPU power draw per forward pass. Scales with model size, sequence length, and batch size. Typical: 200-350W per GPU, ~0.001-0.01 kWh per query.",
    ),
    (
        "tokenizer",
        "Tokenization",
        Infrastructure,
        "TOK",
        false,
        "Byte-pair encoding splits raw text into subword units. Vocabulary size ~32k-100k. Determines the model's atomic unit of processing.",
    ),
    (
        "imageGen",
        "Diffusion Denoising",
        Multimodal,
        "DIF",
        true,
        "Iterative denoising from Gaussian noise. Each step removes a small amount of noise, guided by the text conditioning signal. Typically 20-50 steps.",
    ),
    (
        "voice",
        "Speech Synthesis",
        Multimodal,
        "TTS",
        false,
        "Text-to-waveform via mel spectrogram prediction followed by a vocoder (e.g. HiFi-GAN). Output: 16-24kHz audio, ~150ms latency.",
    ),
    (
        "vision",
        "Patch Encoding",
        Multimodal,
        "ViT",
        true,
        "Image split into fixed-size patches (e.g. 16x16px). Each patch is linearly projected into a token embedding. Processed by a standard transformer encoder.",
    ),
    (
        "guardrail",
        "Safety Classifier",
        Alignment,
        "SAF",
        true,
        "Pre-output safety check across multiple dimensions: helpfulness, honesty, harmlessness, relevance. Scores must exceed thresholds before response is returned.",
    ),
    (
        "rlhf",
        "RLHF",
        Alignment,
        "RLF",
        true,
        "Reinforcement Learning from Human Feedback. A reward model trained on human preference data provides gradient signal to fine-tune the policy model.",
    ),
    (
        "superposition",
        "Superposition",
        Speculative,
        "SUP",
        false,
        "A single neuron encodes multiple unrelated features simultaneously. The correct feature is disambiguated only by context. Active area of mechanistic interpretability research.",
    ),
    (
        "forgetting",
        "Catastrophic Forgetting",
        Speculative,
        "FGT",
        true,
        "New training data overwrites previously learned weights. Information loss is non-recoverable and often undetectable. Fundamental limitation of gradient-based learning.",
    ),
    (
        "hallucination",
        "Confabulation",
        Speculative,
        "HAL",
        true,
        "The model generates plausible but factually incorrect outputs with high confidence. Structurally identical to correct outputs, undetectable without external verification.",
    ),
    (
        "emergence",
        "Emergent Capability",
        Speculative,
        "EMR",
        false,
        "Capability absent below a parameter/data threshold that appears discontinuously above it. Not explicitly trained for. Mechanism poorly understood.",
    ),
    (
        "innerMonologue",
        "Latent Representations",
        Speculative,
        "LAT",
        true,
        "Hidden layer activations as intermediate computation states. Not human-readable. May encode reasoning steps in a learned internal 'language' with no natural-language equivalent.",
    ),
    (
        "polyglot",
        "Language-Agnostic Features",
        Speculative,
        "UNI",
        true,
        "Single neurons that activate for the same concept across languages (e.g. 'dog', 'chien', '犬'). Evidence for language-independent semantic representations in multilingual models.",
    ),
];

/// The shipped gallery entries, in declaration order.
pub fn builtin_entries() -> Vec<CatalogEntry> {
    BUILTIN
        .iter()
        .map(|&(key, label, category, icon, metaphor, description)| {
            CatalogEntry::new(key, label, category, icon, metaphor, description)
        })
        .collect()
}
