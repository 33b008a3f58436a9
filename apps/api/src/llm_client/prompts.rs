// Cross-cutting prompt fragments. Each feature keeps its own prompts.rs
// alongside its handlers.

/// Closing instruction for prompts that expect a bare JSON object back.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    Return ONLY valid JSON. Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. Do NOT change keys or add commentary.";

/// Shared guidance for anything that writes résumé content.
pub const ATS_WRITING_GUIDELINES: &str = "\
    Write for Applicant Tracking Systems: single-column plain text, standard \
    section headings, no tables, no graphics, no emojis or decorative symbols, \
    ASCII punctuation only. Start bullets with strong action verbs such as \
    Developed, Built, Managed, Created, Designed, and quantify impact where \
    the candidate's data supports it. Never invent employers, dates, degrees \
    or metrics that are not in the input.";
