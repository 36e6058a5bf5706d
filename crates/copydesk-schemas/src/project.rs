use copydesk_model::{Condition, DocumentType, FieldDef, FieldKind, PreviewSpec};

/// The portfolio "project" document type.
///
/// Data analysis projects carry a report URL and key insights; both fields
/// stay hidden for every other project type.
pub fn project() -> DocumentType {
    DocumentType::new("project")
        .with_title("Project")
        .field(
            FieldDef::string("title")
                .with_title("Title")
                .with_description("Project title (e.g. TaskFlow - Project Management App)")
                .with_placeholder("e.g. My Project Title")
                .initial_value("Untitled Project")
                .required(),
        )
        .field(
            FieldDef::slug("slug", "title", 96)
                .with_title("Slug")
                .with_description("Auto-generated from title")
                .required(),
        )
        .field(
            FieldDef::text("description")
                .with_title("Description")
                .with_description("A short summary of what the project does")
                .with_placeholder("Write a brief description...")
                .required(),
        )
        .field(
            FieldDef::string("type")
                .with_title("Type")
                .with_description("Category of the project")
                .with_placeholder("Select project type")
                .required()
                .one_of(["frontend", "fullstack", "dataAnalysis"]),
        )
        .field(
            FieldDef::url("image")
                .with_title("Image")
                .with_description("Image URL representing the project")
                .with_placeholder("e.g. https://example.com/image.jpg")
                .required(),
        )
        .field(
            FieldDef::array("techStack", FieldKind::String)
                .with_title("Tech Stack")
                .with_description("List of technologies used in the project")
                .with_placeholder("e.g. React, Node.js, MongoDB")
                .required(),
        )
        .field(
            FieldDef::url("demoUrl")
                .with_title("Demo URL")
                .with_description("URL to preview the live site or project demo (WebDev)")
                .with_placeholder("e.g. https://example.com/demo"),
        )
        .field(
            FieldDef::url("githubUrl")
                .with_title("GitHub URL")
                .with_description("Link to the project's GitHub repository")
                .with_placeholder("e.g. https://github.com/username/repo"),
        )
        .field(
            FieldDef::url("reportUrl")
                .with_title("Report URL")
                .with_description("Link to project report (used for data analysis projects)")
                .with_placeholder("e.g. https://example.com/report.pdf")
                .hidden_when(Condition::not_equals("type", "dataAnalysis")),
        )
        .field(
            FieldDef::array("insights", FieldKind::String)
                .with_title("Insights")
                .with_description("Key takeaways or outcomes from data analysis")
                .hidden_when(Condition::not_equals("type", "dataAnalysis")),
        )
        .field(
            FieldDef::boolean("featured")
                .with_title("Featured")
                .with_description("Mark this project as featured to highlight it")
                .initial_value(false),
        )
        .with_preview(
            PreviewSpec::default()
                .titled("title")
                .title_fallback("Untitled Project")
                .subtitled("type")
                .subtitle_label("Type")
                .subtitle_fallback("No type set"),
        )
}
