use minijinja::{Environment, context};

use crate::models::VariantRecord;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// 构建模板环境，`.html` 模板默认开启 HTML 转义
pub fn build_templates() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("index.html", INDEX_TEMPLATE)?;
    Ok(env)
}

pub fn render_index(
    env: &Environment<'_>,
    rsid: Option<&str>,
    info: Option<&VariantRecord>,
    error: Option<&str>,
) -> Result<String, minijinja::Error> {
    env.get_template("index.html")?
        .render(context! { rsid => rsid, info => info, error => error })
}
