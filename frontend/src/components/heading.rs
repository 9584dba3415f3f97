use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Accent bar colour, `primary` or `secondary`.
    #[prop_or(AttrValue::Static("primary"))]
    pub accent: AttrValue,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading">
            <h2 id={props.id.clone()}>{&props.title}</h2>
            <div class={classes!("heading-bar", format!("bar-{}", props.accent))}></div>
            if let Some(subtitle) = &props.subtitle {
                <p>{subtitle}</p>
            }
        </div>
    }
}
