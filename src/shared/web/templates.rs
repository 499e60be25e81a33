use tera::{Context, Tera};

/// Pages compiled into the binary. Names ending in `.html` are autoescaped.
const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../../templates/base.html")),
    ("home.html", include_str!("../../../templates/home.html")),
    ("auth/login.html", include_str!("../../../templates/auth/login.html")),
    (
        "auth/register.html",
        include_str!("../../../templates/auth/register.html"),
    ),
    ("todo/list.html", include_str!("../../../templates/todo/list.html")),
    ("todo/form.html", include_str!("../../../templates/todo/form.html")),
    (
        "todo/detail.html",
        include_str!("../../../templates/todo/detail.html"),
    ),
    (
        "todo/overdue.html",
        include_str!("../../../templates/todo/overdue.html"),
    ),
];

#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())?;
        Ok(Self { tera })
    }

    pub fn render(&self, name: &str, context: &Context) -> Result<String, tera::Error> {
        self.tera.render(name, context)
    }
}
