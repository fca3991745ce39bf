use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

use crate::content::model::{ContentDocument, Experience, Profile, Project, SkillGroup};

static FALLBACK: LazyLock<Arc<ContentDocument>> = LazyLock::new(|| Arc::new(build()));

/// The compiled-in default document.
///
/// Rendered before the first load settles and kept when loading fails. The same allocation is
/// shared by every caller.
pub fn fallback_document() -> Arc<ContentDocument> {
    Arc::clone(&FALLBACK)
}

fn s(v: &str) -> Option<String> {
    Some(v.to_string())
}

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|v| v.to_string()).collect()
}

fn build() -> ContentDocument {
    ContentDocument {
        profile: Profile {
            name: s("Soumya Ranjan Das"),
            role: s("Senior Full-Stack Developer"),
            tagline: s(
                "Crafting high-performance digital experiences with an eye for aesthetic precision.",
            ),
            about: s(
                "Based in Puri, Odisha. I specialize in building scalable web applications that \
                 merge world-class engineering with premium design aesthetics. My philosophy is \
                 simple: if it doesn't look stunning and perform flawlessly, it's not finished.",
            ),
            location: s("Badagan, Nimapada, Puri, Odisha, India 752121"),
            email: s("soumya.rdas@example.com"),
            whatsapp: s("919876543210"),
            socials: BTreeMap::from([
                (
                    "github".to_string(),
                    "https://github.com/soumyardas".to_string(),
                ),
                (
                    "linkedin".to_string(),
                    "https://linkedin.com/in/soumyardas".to_string(),
                ),
                (
                    "twitter".to_string(),
                    "https://twitter.com/soumyardas".to_string(),
                ),
            ]),
        },
        skills: vec![
            SkillGroup {
                category: "Frontend".to_string(),
                items: list(&[
                    "React",
                    "TypeScript",
                    "Tailwind CSS",
                    "Framer Motion",
                    "Next.js",
                ]),
            },
            SkillGroup {
                category: "Backend".to_string(),
                items: list(&["Node.js", "PostgreSQL", "GraphQL", "Python", "Redis"]),
            },
            SkillGroup {
                category: "Design".to_string(),
                items: list(&["Figma", "Apple HIG", "UI/UX Research", "3D WebGL"]),
            },
        ],
        experience: vec![
            Experience {
                title: "Senior Software Engineer".to_string(),
                company: "TechNova Solutions".to_string(),
                period: "2022 - Present".to_string(),
                description: "Architecting premium SaaS platforms for international luxury \
                              brands, focusing on performance and glass-morphic UI \
                              implementations."
                    .to_string(),
            },
            Experience {
                title: "Full-Stack Developer".to_string(),
                company: "Creative Pulse India".to_string(),
                period: "2020 - 2022".to_string(),
                description: "Led the transition to React-based micro-frontends, increasing \
                              load performance by 45% across the ecosystem."
                    .to_string(),
            },
        ],
        projects: vec![
            Project {
                title: "Ethereal Commerce".to_string(),
                description: "A high-end e-commerce engine for fashion houses with AR virtual \
                              try-on features."
                    .to_string(),
                tech: list(&["Next.js", "Three.js", "Stripe"]),
                image: s(
                    "https://images.unsplash.com/photo-1441986300917-64674bd600d8?auto=format&fit=crop&q=80&w=800",
                ),
                url: s("https://github.com/soumyardas/ethereal-commerce"),
            },
            Project {
                title: "Zenith Analytics".to_string(),
                description: "Minimalist dashboard providing deep-learning insights for Indian \
                              fintech startups."
                    .to_string(),
                tech: list(&["React", "D3.js", "Python"]),
                image: s(
                    "https://images.unsplash.com/photo-1551288049-bbbda536ad0a?auto=format&fit=crop&q=80&w=800",
                ),
                url: s("https://github.com/soumyardas/zenith-analytics"),
            },
            Project {
                title: "Lumina Studio".to_string(),
                description: "A portfolio builder for Indian photographers with smart-gallery \
                              optimization."
                    .to_string(),
                tech: list(&["TypeScript", "AWS S3", "Sharp"]),
                image: s(
                    "https://images.unsplash.com/photo-1493723843671-1d655e7d987a?auto=format&fit=crop&q=80&w=800",
                ),
                url: s("https://github.com/soumyardas/lumina-studio"),
            },
        ],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/fallback.rs"]
mod tests;
