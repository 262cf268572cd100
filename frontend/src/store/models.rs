use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct Service {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub name_ar: Option<String>,
    pub description: String,
    #[serde(default)]
    pub description_ar: Option<String>,
    #[serde(default)]
    pub technical_skills_tools: Option<Vec<String>>,
    #[serde(default)]
    pub technical_skills_tools_ar: Option<Vec<String>>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Writable columns of `Services`.
#[derive(Serialize, Clone, Debug, PartialEq, Default)]
pub struct ServiceInput {
    pub name: String,
    pub name_ar: String,
    pub description: String,
    pub description_ar: String,
    pub technical_skills_tools: Vec<String>,
    pub technical_skills_tools_ar: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl From<&Service> for ServiceInput {
    fn from(s: &Service) -> Self {
        Self {
            name: s.name.clone(),
            name_ar: s.name_ar.clone().unwrap_or_default(),
            description: s.description.clone(),
            description_ar: s.description_ar.clone().unwrap_or_default(),
            technical_skills_tools: s.technical_skills_tools.clone().unwrap_or_default(),
            technical_skills_tools_ar: s.technical_skills_tools_ar.clone().unwrap_or_default(),
            created_at: None,
            updated_at: None,
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct ProcessStep {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct Cta {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Embedded parent row from `select=*,Services(name)`.
#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ServiceName {
    pub name: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ServiceDetail {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub graphic_design_portfolio: Option<Vec<String>>,
    #[serde(default)]
    pub process: Option<Vec<ProcessStep>>,
    #[serde(default)]
    pub benefits: Option<Vec<String>>,
    #[serde(default)]
    pub cta: Option<Cta>,
    #[serde(default, rename = "Services")]
    pub service: Option<ServiceName>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Default)]
pub struct ServiceDetailInput {
    pub name: String,
    pub description: String,
    pub service_id: String,
    pub details: String,
    pub long_description: String,
    pub graphic_design_portfolio: Vec<String>,
    pub process: Vec<ProcessStep>,
    pub benefits: Vec<String>,
    pub cta: Cta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl From<&ServiceDetail> for ServiceDetailInput {
    fn from(d: &ServiceDetail) -> Self {
        Self {
            name: d.name.clone(),
            description: d.description.clone(),
            service_id: d.service_id.clone(),
            details: d.details.clone().unwrap_or_default(),
            long_description: d.long_description.clone().unwrap_or_default(),
            graphic_design_portfolio: d.graphic_design_portfolio.clone().unwrap_or_default(),
            process: d.process.clone().unwrap_or_default(),
            benefits: d.benefits.clone().unwrap_or_default(),
            cta: d.cta.clone().unwrap_or_default(),
            created_at: None,
            updated_at: None,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub question_ar: Option<String>,
    #[serde(default)]
    pub answer_ar: Option<String>,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default, rename = "Services")]
    pub service: Option<ServiceName>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Default)]
pub struct FaqInput {
    pub question: String,
    pub answer: String,
    pub question_ar: String,
    pub answer_ar: String,
    pub service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl From<&Faq> for FaqInput {
    fn from(f: &Faq) -> Self {
        Self {
            question: f.question.clone(),
            answer: f.answer.clone(),
            question_ar: f.question_ar.clone().unwrap_or_default(),
            answer_ar: f.answer_ar.clone().unwrap_or_default(),
            service_id: f.service_id.clone(),
            updated_at: None,
        }
    }
}

/// URL fragment used for service pages, e.g. "Web Development" -> "web-development".
pub fn slugify(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_detail_with_embedded_parent() {
        let row: ServiceDetail = serde_json::from_str(
            r#"{
                "id": "d1",
                "name": "Web Development",
                "description": "Sites",
                "service_id": "s1",
                "details": null,
                "long_description": "Long",
                "graphic_design_portfolio": ["https://img/1.png"],
                "process": [{"title": "Plan", "description": "Scope it", "icon": "clipboard"}],
                "benefits": ["Fast"],
                "cta": {"title": "Ready?", "description": "Call us"},
                "Services": {"name": "Web"},
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": null
            }"#,
        )
        .unwrap();
        assert_eq!(row.service.as_ref().map(|s| s.name.as_str()), Some("Web"));
        assert_eq!(row.process.unwrap()[0].icon, "clipboard");
        assert_eq!(row.cta.unwrap().title, "Ready?");
        assert!(row.details.is_none());
    }

    #[test]
    fn sparse_rows_still_decode() {
        let faq: Faq = serde_json::from_str(r#"{"id":"f","question":"Q","answer":"A"}"#).unwrap();
        assert!(faq.service_id.is_none());
        assert!(faq.question_ar.is_none());

        let service: Service =
            serde_json::from_str(r#"{"id":"s","name":"Logo Design","description":"d"}"#).unwrap();
        assert!(service.technical_skills_tools.is_none());
    }

    #[test]
    fn input_skips_unset_timestamps() {
        let input = FaqInput {
            question: "Q".into(),
            answer: "A".into(),
            ..FaqInput::default()
        };
        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("updated_at").is_none());
        assert!(json.get("service_id").unwrap().is_null());
    }

    #[test]
    fn slugs_match_route_segments() {
        assert_eq!(slugify("Web Development"), "web-development");
        assert_eq!(slugify("Social Media Management"), "social-media-management");
        assert_eq!(slugify(" Logo Design "), "logo-design");
    }
}
