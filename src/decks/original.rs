//! The original sixteen-slide pitch deck.

use super::common::{
    DeckStyle, content_slide, large_text_slide, new_presentation, thank_you_slide, title_slide,
    two_column_slide,
};
use crate::common::error::Result;
use crate::pptx::Presentation;

pub const OUTPUT_FILE: &str = "CharacterLock_AI_Presentation.pptx";

const STYLE: DeckStyle = DeckStyle::ORIGINAL;

pub fn build() -> Result<Presentation> {
    let mut pres = new_presentation("CharacterLock AI");

    title_slide(
        &mut pres,
        "CharacterLock AI",
        "Persistent Character Memory for Film Production\nCine AI Hackathon 2026",
    )?;

    content_slide(
        &mut pres,
        &STYLE,
        "1. The Problem: Character Inconsistency in AI Film Production",
        &[
            "Current AI tools cannot maintain character consistency across frames",
            "Characters change appearance between scenes - different faces, hair, clothing",
            "AI-generated storyboards are UNUSABLE for production",
            "Manual fixes cost $50,000 - $200,000 per project",
            "60% of production time wasted on corrections",
            "Blocks indie filmmakers from using AI tools",
        ],
    )?;

    large_text_slide(
        &mut pres,
        &STYLE,
        "The Cost of Inconsistency",
        "$50K - $200K",
        "wasted per production fixing character drift",
    );

    content_slide(
        &mut pres,
        &STYLE,
        "2. Our Idea: CharacterLock AI",
        &[
            "Persistent Character Memory System with 'Character DNA'",
            "Automated Consistency Validation with quality scores",
            "Smart Regeneration - fix only problematic frames",
            "Unified workflow: Create → Generate → Validate",
            "Production-ready output with 85%+ consistency",
            "Quantified, measurable results",
        ],
    )?;

    content_slide(
        &mut pres,
        &STYLE,
        "How It Works (3 Simple Steps)",
        &[
            "STEP 1: Create Character",
            "  • Upload 1-3 reference images",
            "  • AI extracts 'Character DNA' (visual embeddings)",
            "  • Permanent identity created in 10-15 seconds",
            "",
            "STEP 2: Generate Storyboard",
            "  • Write your script (any length)",
            "  • Select characters to include",
            "  • AI generates consistent frames with Character DNA",
            "",
            "STEP 3: Validate & Fix",
            "  • Automated consistency analysis (0-100% scores)",
            "  • Get detailed quality report",
            "  • One-click regeneration for low-scoring frames",
        ],
    )?;

    two_column_slide(
        &mut pres,
        "4. How It Works: Technical Innovation",
        &[
            "CHARACTER DNA EXTRACTION:",
            "• Vision API analyzes reference images",
            "• Extracts facial features, hair, clothing, style",
            "• Creates persistent embedding vector",
            "• Generates optimized prompt template",
            "",
            "CONSISTENT GENERATION:",
            "• GPT-4 parses script into scenes",
            "• Character DNA injected into every prompt",
            "• DALL-E 3 generates with specific instructions",
            "• Character identity maintained across all frames",
        ],
        &[
            "CONSISTENCY VALIDATION:",
            "• Vision API extracts features from each frame",
            "• Calculates cosine similarity vs. original DNA",
            "• Scores: 85%+ = Excellent, 70-84% = Good, <70% = Fix",
            "• Generates detailed report with recommendations",
            "",
            "SMART REGENERATION:",
            "• Automatically flags problematic frames",
            "• One-click regeneration using same DNA",
            "• No need to regenerate entire storyboard",
            "• Iterative improvement until perfect",
        ],
    );

    two_column_slide(
        &mut pres,
        "3. Why CharacterLock AI is Better",
        &[
            "EXISTING TOOLS:",
            "• 40-60% consistency (unusable)",
            "• Manual validation required",
            "• Separate tools for each step",
            "• Guesswork - no quality metrics",
            "• Full regeneration when issues found",
            "• No explainability",
            "• Expensive ($50-200/month)",
        ],
        &[
            "CHARACTERLOCK AI:",
            "• 85%+ consistency (production-ready)",
            "• Automated validation with scores",
            "• Unified, integrated workflow",
            "• Quantified quality (0-100%)",
            "• Smart frame-level regeneration",
            "• Detailed reports & recommendations",
            "• Open-source core",
        ],
    );

    content_slide(
        &mut pres,
        &STYLE,
        "Our Unique Advantages",
        &[
            "✓ Integrated Workflow - not separate tools",
            "✓ Quantified Quality - actual scores, not guesswork",
            "✓ Production-Ready - meets professional standards",
            "✓ Smart Regeneration - fix only what needs fixing",
            "✓ Explainable AI - detailed reports show exactly what to improve",
            "✓ Measurable Results - consistency scores you can trust",
        ],
    )?;

    large_text_slide(
        &mut pres,
        &STYLE,
        "5. Expected Impact: The Numbers",
        "85%+",
        "Character consistency (vs. 40-60% baseline)",
    );

    content_slide(
        &mut pres,
        &STYLE,
        "Expected Impact: Transforming Film Production",
        &[
            "COST SAVINGS:",
            "• $50,000 - $200,000 saved per production",
            "• Manual fixing eliminated",
            "• API costs: ~$0.46 per 10-frame storyboard",
            "",
            "TIME SAVINGS:",
            "• 50-70% reduction in storyboard production time",
            "• From weeks to minutes",
            "• Complete 10-frame storyboard in 5-6 minutes",
            "",
            "ACCESSIBILITY:",
            "• Indie filmmakers can now afford AI workflows",
            "• Small studios gain enterprise-level tools",
            "• Democratizes film pre-production",
        ],
    )?;

    content_slide(
        &mut pres,
        &STYLE,
        "Market Opportunity",
        &[
            "TARGET USERS:",
            "• Independent filmmakers (need affordable storyboards)",
            "• Production studios (rapid pre-visualization)",
            "• Animation teams (consistency at scale)",
            "• Ad agencies (fast concept visualization)",
            "",
            "MARKET SIZE:",
            "• Pre-visualization market: $2.8B globally (2025)",
            "• AI content generation: Growing 45% YoY",
            "• Film production software: $5.4B by 2028",
        ],
    )?;

    content_slide(
        &mut pres,
        &STYLE,
        "Proven Results (Live Demo)",
        &[
            "✓ Character Creation: 10-15 seconds",
            "✓ 5-Scene Storyboard: 4-6 minutes",
            "✓ Consistency Validation: 15-25 seconds",
            "✓ Achieved 87.5% overall consistency",
            "✓ Automated frame regeneration successful",
            "✓ Production-ready quality output",
            "",
            "→ Complete workflow in under 5 minutes",
        ],
    )?;

    two_column_slide(
        &mut pres,
        "Technical Implementation",
        &[
            "BACKEND:",
            "• Python FastAPI (async, auto-docs)",
            "• OpenAI GPT-4 (script parsing)",
            "• OpenAI DALL-E 3 (generation)",
            "• OpenAI Vision API (validation)",
            "• SQLite (persistent storage)",
            "• NumPy/scikit-learn (similarity)",
            "",
            "API ENDPOINTS:",
            "• 15+ REST endpoints",
            "• Auto-generated documentation",
            "• Comprehensive error handling",
        ],
        &[
            "FRONTEND:",
            "• React 18 + Vite",
            "• Tailwind CSS",
            "• Responsive design",
            "• Real-time progress updates",
            "",
            "KEY FEATURES:",
            "• Character DNA extraction",
            "• Scene-by-scene generation",
            "• Cosine similarity scoring",
            "• Automated validation reports",
            "• Smart frame regeneration",
            "• Export-ready output",
        ],
    );

    content_slide(
        &mut pres,
        &STYLE,
        "Future Roadmap",
        &[
            "PHASE 1 (1-2 months):",
            "• Fine-tune consistency algorithms",
            "• Add multiple AI model support (Stable Diffusion, Midjourney)",
            "• User authentication & cloud deployment",
            "",
            "PHASE 2 (3-6 months):",
            "• Multi-user collaboration features",
            "• Export to industry formats (FCP XML, Adobe Premiere)",
            "• Mobile app for on-set viewing",
            "",
            "PHASE 3 (6-12 months):",
            "• Video storyboard animation",
            "• 3D character model generation",
            "• Style transfer (consistent art styles)",
            "• API for third-party integrations",
        ],
    )?;

    content_slide(
        &mut pres,
        &STYLE,
        "Join Us in Transforming Film Production",
        &[
            "CharacterLock AI solves a $50K-$200K problem",
            "",
            "✓ Production-ready technology",
            "✓ Measurable, quantified results",
            "✓ Real business value",
            "✓ Market-ready solution",
            "",
            "We're looking for:",
            "• Feedback from film professionals",
            "• Pilot partner studios",
            "• Technical collaborators",
            "",
            "Let's make AI-assisted filmmaking accessible to everyone!",
        ],
    )?;

    thank_you_slide(
        &mut pres,
        &STYLE,
        &[
            "CharacterLock AI",
            "From concept to consistent storyboard in 5 minutes",
            "",
            "Questions? Let's talk!",
        ],
    );

    Ok(pres)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_slide_count() {
        let pres = build().unwrap();
        assert_eq!(pres.slide_count(), 16);
        assert!(pres.out_of_bounds_shapes().is_empty());
    }

    #[test]
    fn test_bullets_are_18pt() {
        let pres = build().unwrap();
        let body = pres.slide(1).and_then(|s| s.placeholder(1)).unwrap();
        assert!(
            body.text_frame().paragraphs()[1..]
                .iter()
                .all(|p| p.font().size == Some(18.0))
        );
    }
}
