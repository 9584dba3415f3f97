use yew::prelude::*;

use crate::content::Card;

#[derive(Properties, PartialEq)]
pub struct InfoCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
    /// Extra class for the section-specific look (`feature`, `service`, `expertise`).
    #[prop_or_default]
    pub variant: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(InfoCard)]
pub fn info_card(props: &InfoCardProps) -> Html {
    html! {
        <div class={classes!("info-card", props.variant.clone())}>
            <div class="card-icon">{&props.icon}</div>
            <h3>{&props.title}</h3>
            <p>{&props.description}</p>
            { for props.children.iter() }
        </div>
    }
}

pub fn render_cards(cards: &'static [Card], variant: &'static str) -> Html {
    cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            html! {
                <InfoCard
                    key={i}
                    icon={card.icon}
                    title={card.title}
                    description={card.description}
                    variant={classes!(variant)}
                />
            }
        })
        .collect::<Html>()
}
