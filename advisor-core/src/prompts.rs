//! Prompt templates for strict-JSON answers.
//!
//! Every function here is pure: same inputs, same prompt text. The model is
//! told to emit ONLY a JSON object; each topic carries its own fixed field
//! set, while follow-up expansion uses one richer nested schema independent
//! of topic, with per-topic behavior rules appended as plain guidance.

use crate::topics::Topic;

/// Shared preamble: question, clarifiers, web data, and the no-blanks rules.
fn base_context(question: &str, clarifiers: &str, snippets: &str) -> String {
    format!(
        r#"
You are an AI that MUST respond in STRICT JSON ONLY.
Never include commentary, markdown, explanations, or backticks.

User Question:
{question}

Additional Clarifiers:
{clarifiers}

Web Data:
{snippets}

RULES:
- NEVER return "unknown".
- NEVER leave fields empty.
- If web data is incomplete, use **industry-standard estimates**, widely known facts, and typical values.
- Fill ALL arrays with at least 2 relevant items.
- JSON must be fully factual, complete, polished.
"#
    )
}

/// Renders the main answer prompt for a classified question.
///
/// The schema block is fixed per topic; `company` is only embedded for
/// [`Topic::Company`].
pub fn build_answer_prompt(
    topic: Topic,
    question: &str,
    clarifiers: &str,
    snippets: &str,
    company: Option<&str>,
) -> String {
    let base = base_context(question, clarifiers, snippets);

    match topic {
        Topic::Company => {
            let company = company.unwrap_or_default();
            format!(
                r#"{base}

Company Detected: {company}

Return STRICT JSON ONLY with this schema:

{{
  "company_name": "{company}",
  "summary": "",
  "industry": "",
  "founding_year": "",
  "headquarters": "",
  "ceo": "",
  "employee_count": "",
  "global_presence": "",
  "hiring_info": "",
  "roles_open": ["", ""],
  "skills_required": ["", ""],
  "salaries": "",
  "interview_process": "",
  "work_culture": "",
  "tech_stack": ["", ""],
  "products_services": ["", ""],
  "competitors": ["", ""],
  "latest_news": "",
  "actionable_steps": ["", ""]
}}

RULES:
- NO field must ever be left blank.
- NO field must ever be "unknown".
- Use best-known information + reasonable estimates.
- Return ONLY JSON with no wrapper text.
"#
            )
        }
        Topic::Job => format!(
            r#"{base}
Return STRICT JSON ONLY:

{{
  "summary": "",
  "job_roles": [],
  "required_skills": [],
  "roadmap": [],
  "interview_prep": [],
  "salary_range_india": "",
  "salary_range_global": "",
  "companies_hiring": [],
  "actionable_steps": []
}}
"#
        ),
        Topic::Finance => format!(
            r#"{base}

Return ONLY this JSON structure:

{{
  "summary": "",
  "options": [],
  "risk_notes": "",
  "suggested_strategy": "",
  "tax_considerations": ""
}}
"#
        ),
        Topic::Gaming => format!(
            r#"{base}

Return ONLY this JSON structure:

{{
  "summary": "",
  "roles": [],
  "required_skills": [],
  "portfolio_advice": "",
  "companies_hiring": []
}}
"#
        ),
        Topic::Coding => format!(
            r#"{base}

Return ONLY this JSON structure:

{{
  "summary": "",
  "steps": [],
  "pseudocode": "",
  "complexity": "",
  "example": ""
}}
"#
        ),
        Topic::General => format!(
            r#"{base}

Return ONLY this JSON structure:

{{
  "summary": "",
  "steps": [],
  "details": "",
  "example": ""
}}
"#
        ),
    }
}

/// Renders the prompt asking for six follow-up options.
///
/// The model must answer with exactly `{{"options": [...]}}`; parsing and
/// the fallback live in [`crate::options`].
pub fn build_options_prompt(
    topic: Topic,
    company: Option<&str>,
    previous_json: &str,
    snippets: &str,
) -> String {
    let company = company.unwrap_or_default();
    format!(
        r#"
You are an AI assistant generating SMART follow-up options for the user.

You MUST return STRICT JSON only.

Topic: {topic}
Company: {company}
Previous JSON Answer:
{previous_json}

Relevant Web Snippets:
{snippets}

Your task:
- generate 6 follow-up questions the user may want to explore next
- questions must be short, relevant, actionable
- avoid generic questions
- tie them to the detected topic
- DO NOT hallucinate facts; ask only valid follow-ups

Return EXACTLY:

{{
  "options": ["...", "...", "...", "...", "...", "..."]
}}
"#
    )
}

/// Renders the follow-up expansion prompt.
///
/// One nested schema regardless of topic; the per-topic behavior rules are
/// appended as text guidance, not structural change.
pub fn build_followup_prompt(
    option_text: &str,
    previous_json: &str,
    company: &str,
    topic: Topic,
) -> String {
    format!(
        r#"
You are an ULTRA-PRECISE MULTI-DOMAIN EXPERT AI.
You expand ONLY the selected follow-up option with maximum clarity and correctness.

=========================
FOLLOW-UP OPTION SELECTED
=========================
{option_text}

======================
PREVIOUS ANSWER (JSON)
======================
{previous_json}

=====================
SESSION CONTEXT
=====================
company: {company}
topic: {topic}

========================================
GLOBAL RULES — MUST FOLLOW STRICTLY
========================================
1. Output MUST BE ONLY valid JSON.
2. No markdown, no code fences, no commentary.
3. No text outside JSON. Never break JSON format.
4. Must be fully parseable JSON — NO trailing commas, NO escape errors.
5. Every field must be meaningful, domain-accurate, and non-generic.
6. Must NOT repeat or restate the previous JSON — only EXPAND.
7. If uncertain, use probability-based reasoning instead of hallucinating.
8. Assume all facts must be internally consistent and realistic.

======================================================
OUTPUT FORMAT — STRICT JSON SCHEMA (DO NOT MODIFY IT)
======================================================
{{
  "summary": "2-4 sentence highly condensed explanation of the chosen option.
              Must reflect expert domain knowledge and high clarity.",

  "details": "Deep, multi-paragraph analysis (but compact).
              Must contain: reasoning, domain insights, constraints, risks,
              benefits, best practices, modern trends (2023-2025),
              comparison of alternatives, and tactical knowledge.",

  "expanded_context": {{
    "domain_specific_analysis": "Add deeper breakdown specific to the domain.",
    "relevant_metrics": ["Include metrics, KPIs, statistics, or indicators."],
    "risk_factors": ["List measurable risks."],
    "opportunities": ["List realistic opportunities grounded in domain facts."],
    "timeline_estimation": "Give a realistic timeline (short/medium/long term)."
  }},

  "next_steps": [
    "Provide 8-12 ultra-specific, actionable steps.",
    "Steps must be ordered logically.",
    "Each must be measurable, practical, and realistic.",
    "Avoid generic statements like 'improve skills' or 'research more'."
  ],

  "resource_recommendations": {{
    "tools": ["List 3-6 tools relevant to the follow-up option."],
    "learning_paths": ["If applicable, give structured learning paths."],
    "industry_sources": ["Include reputable industry references."],
    "communities": ["List communities, forums, or networks to join."],
    "benchmarks": ["Give benchmarks or standards to measure progress."]
  }},

  "confidence_score": "Give a % confidence score (0-100%) based on data,
                       clarity of context, and typical industry certainty."
}}

================================================
DOMAIN BEHAVIOR RULES (ULTRA INTELLIGENT MODE)
================================================

IF TOPIC = COMPANY:
- Include information on: hiring patterns, org culture, tech stack,
  salary differentiation by region, competitors, market shifts,
  hiring cycles, evaluation process, career tracks.
- For Indian companies: consider TCS/Infosys/Wipro/HCL hiring patterns.
- For US companies: consider layoff cycles, hybrid policies, FAANG standards.

IF TOPIC = JOB:
- Include resume filters, ATS behavior, skill mapping,
  interview loop structure, expected salary ranges,
  high-demand skills, hiring funnel probabilities.

IF TOPIC = FINANCE:
- Include Indian taxation, risk categories (low/med/high),
  diversification logic, asset allocation, inflation effects,
  market cycles, SIP vs lump-sum, portfolio balancing.

IF TOPIC = GAMING:
- Include game engines (Unity/Unreal/Godot), pipelines (Art -> Dev -> QA),
  monetization models, indie vs AAA strategies,
  top gaming studios, asset creation guidelines.

IF TOPIC = CODING:
- Include DSA principles, algorithmic thinking, complexity breakdowns,
  debugging process, test cases, optimization tricks,
  tech interview expectations, system design considerations.

IF TOPIC = GENERAL:
- Keep output simple but structured and logical.

===================================================
HALLUCINATION PREVENTION — CRITICAL RULES
===================================================
- DO NOT fabricate data, proprietary numbers, or confidential information.
- If a fact is unknown, phrase it probabilistically:
  "Most companies typically...", "Based on industry trends...", "Common patterns show..."
- Never invent fake URLs, fake statistics, or fake people.

====================================================
FINAL INSTRUCTION — PRODUCE JSON ONLY
====================================================
NOW produce ONLY the final JSON object. No explanation.
"#
    )
}
