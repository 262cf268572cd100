use crate::store::models::{slugify, Cta, ProcessStep, Service, ServiceDetail};

/// Shown on the home page grid, in this order.
pub const FEATURED: [&str; 4] = [
    "Graphic Design",
    "Logo Design",
    "Web Development",
    "Social Media Management",
];

struct Entry {
    name: &'static str,
    description: &'static str,
    details: &'static str,
    long_description: &'static str,
    skills: &'static [&'static str],
    process: &'static [(&'static str, &'static str, &'static str)],
    benefits: &'static [&'static str],
    cta: (&'static str, &'static str),
}

const ENTRIES: [Entry; 5] = [
    Entry {
        name: "Graphic Design",
        description: "Eye-catching visuals and designs that communicate your brand's message effectively and leave a lasting impression.",
        details: "Our graphic design services focus on creating visually appealing and effective designs that help your brand stand out.",
        long_description: "Our graphic design team combines creativity with strategic thinking to deliver designs that look great and achieve your business objectives, from branding and marketing materials to digital assets and print collateral.",
        skills: &["Adobe Photoshop", "Adobe Illustrator", "Adobe InDesign", "Figma", "Color Theory", "Typography", "Layout Design"],
        process: &[
            ("Discovery", "We learn your brand, audience and design objectives through in-depth consultations.", "search"),
            ("Concept Development", "Our designers create initial concepts based on your requirements and brand guidelines.", "lightbulb"),
            ("Refinement", "We refine the chosen concept based on your feedback.", "edit"),
            ("Finalization", "Final designs are prepared in every format you need.", "check-circle"),
        ],
        benefits: &[
            "Increased brand recognition and recall",
            "Consistent visual identity across all touchpoints",
            "Designs optimized for both print and digital media",
        ],
        cta: ("Ready to elevate your brand with stunning designs?", "Contact us today to discuss your graphic design needs."),
    },
    Entry {
        name: "Logo Design",
        description: "Professional and memorable logos that capture your brand's essence and help you stand out in the marketplace.",
        details: "Our logo design process is thorough and collaborative, creating logos that are meaningful and memorable.",
        long_description: "A logo is the cornerstone of your brand identity. We create distinctive, versatile and timeless logos that communicate your brand's values and personality.",
        skills: &["Adobe Illustrator", "Sketching", "Typography", "Brand Strategy", "Vector Design"],
        process: &[
            ("Brand Analysis", "We study your values, audience and competitors to set the design direction.", "search"),
            ("Sketching & Concepts", "Multiple concept sketches explore different visual approaches.", "pen-tool"),
            ("Digital Rendering", "The strongest concepts are rendered digitally and refined.", "monitor"),
            ("Finalization & Delivery", "You receive the final logo in all required formats with usage guidelines.", "package"),
        ],
        benefits: &[
            "A unique identity that sets you apart",
            "Versatile marks that work at any size",
            "Full ownership of every source file",
        ],
        cta: ("Ready to create a logo that makes a lasting impression?", "Let's design a mark your customers will remember."),
    },
    Entry {
        name: "Web Development",
        description: "Custom websites and web applications built with the latest technologies for optimal performance and user experience.",
        details: "Our web development team creates responsive, user-friendly websites and applications with clean code and strong search visibility.",
        long_description: "We build fast, accessible and maintainable websites and web applications, from marketing sites to full e-commerce platforms.",
        skills: &["HTML5", "CSS3", "JavaScript", "React", "Node.js", "WordPress", "Shopify", "SEO", "Responsive Design"],
        process: &[
            ("Discovery & Planning", "We define goals, audience and the features your site needs.", "clipboard"),
            ("Design & Prototyping", "Wireframes and interactive prototypes shape the experience.", "layout"),
            ("Development", "Our developers build the site with clean, performant code.", "code"),
            ("Testing & Launch", "Everything is tested across devices before going live.", "rocket"),
        ],
        benefits: &[
            "Responsive design on every device",
            "Fast load times and strong SEO foundations",
            "Scalable code that grows with your business",
        ],
        cta: ("Ready to build a website that drives results?", "Tell us about your project and we'll get started."),
    },
    Entry {
        name: "Content Creation",
        description: "Engaging and SEO-optimized content that resonates with your audience.",
        details: "Our content creation services help you tell your brand's story in a compelling way, from articles to newsletters.",
        long_description: "Content that engages your audience and drives conversions: blog posts, social media content, email campaigns and more, written to your brand's voice.",
        skills: &["Copywriting", "Blog Writing", "SEO Content", "Email Marketing", "Content Strategy", "Editing"],
        process: &[
            ("Content Strategy", "We align topics and formats with your business goals.", "target"),
            ("Research & Planning", "Keyword and audience research drive a content calendar.", "search"),
            ("Content Creation", "Our writers produce on-brand, engaging content.", "edit"),
            ("Optimization & Distribution", "Content is optimized and published on the right channels.", "share"),
        ],
        benefits: &[
            "Higher search rankings and organic traffic",
            "A consistent brand voice",
            "Content that converts readers into customers",
        ],
        cta: ("Ready to create content that connects and converts?", "Let's plan your next campaign together."),
    },
    Entry {
        name: "Social Media Management",
        description: "Strategic social media presence that builds community, increases engagement, and drives conversions for your brand.",
        details: "We build and maintain your presence on the platforms that matter most to your audience.",
        long_description: "From strategy to daily community management, we grow engaged audiences and measure what works so results keep improving.",
        skills: &["Social Media Strategy", "Content Calendar Planning", "Community Management", "Social Media Analytics", "Paid Social Campaigns"],
        process: &[
            ("Strategy Development", "We define platforms, audiences and goals.", "compass"),
            ("Content Planning & Creation", "A steady calendar of posts tailored to each platform.", "calendar"),
            ("Community Management", "We engage with your followers and grow your community.", "users"),
            ("Analysis & Optimization", "Regular reports guide continuous improvement.", "bar-chart"),
        ],
        benefits: &[
            "Stronger engagement with your audience",
            "Consistent posting without the overhead",
            "Clear reporting on what drives results",
        ],
        cta: ("Ready to build a powerful social media presence?", "Reach out and let's grow your community."),
    },
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Built-in services, used when the store has none.
pub fn services() -> Vec<Service> {
    ENTRIES
        .iter()
        .map(|e| Service {
            id: slugify(e.name),
            name: e.name.to_string(),
            description: e.description.to_string(),
            technical_skills_tools: Some(owned(e.skills)),
            ..Service::default()
        })
        .collect()
}

pub fn featured_services() -> Vec<Service> {
    let all = services();
    FEATURED
        .iter()
        .filter_map(|name| all.iter().find(|s| s.name == *name).cloned())
        .collect()
}

pub fn detail(slug: &str) -> Option<ServiceDetail> {
    ENTRIES.iter().find(|e| slugify(e.name) == slug).map(|e| ServiceDetail {
        id: slugify(e.name),
        name: e.name.to_string(),
        description: e.description.to_string(),
        service_id: slugify(e.name),
        details: Some(e.details.to_string()),
        long_description: Some(e.long_description.to_string()),
        process: Some(
            e.process
                .iter()
                .map(|(title, description, icon)| ProcessStep {
                    title: title.to_string(),
                    description: description.to_string(),
                    icon: icon.to_string(),
                })
                .collect(),
        ),
        benefits: Some(owned(e.benefits)),
        cta: Some(Cta {
            title: e.cta.0.to_string(),
            description: e.cta.1.to_string(),
        }),
        ..ServiceDetail::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_cards_resolve() {
        let featured = featured_services();
        assert_eq!(featured.len(), FEATURED.len());
        assert_eq!(featured[0].name, "Graphic Design");
    }

    #[test]
    fn every_service_has_a_detail_page() {
        for service in services() {
            let detail = detail(&slugify(&service.name)).expect("detail page");
            assert_eq!(detail.name, service.name);
            assert!(!detail.process.unwrap_or_default().is_empty());
        }
    }

    #[test]
    fn unknown_slug_has_no_detail() {
        assert!(detail("time-travel").is_none());
    }
}
