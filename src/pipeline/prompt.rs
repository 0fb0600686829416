//! Prompt assembly
//!
//! The exact template text is part of the observable contract: the model's
//! downstream behavior depends on it, so tests assert byte-for-byte output.

/// Fixed system instruction sent with every completion
pub const SYSTEM_INSTRUCTION: &str = "Eres un asistente experto en recuperación aumentada por generación (RAG). Responde de forma detallada y extensa usando solo el contexto proporcionado.";

/// Build the user prompt from retrieved passages and the question.
///
/// Passages are joined with a literal `---` separator line, with no
/// separator before the first or after the last passage.
pub fn build_prompt(passages: &[String], question: &str) -> String {
    let context = passages.join("\n---\n");
    format!(
        "Contexto relevante:\n{}\n\nPregunta: {}\nRespuesta (por favor, responde de forma detallada y extensa usando solo el contexto proporcionado):",
        context, question
    )
}
