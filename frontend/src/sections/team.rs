use yew::prelude::*;

use crate::components::reveal::{use_reveal, RevealMode};
use crate::content::TEAM;

#[function_component(TeamSection)]
pub fn team_section() -> Html {
    let grid_ref = use_node_ref();
    let visible = use_reveal(grid_ref.clone(), RevealMode::Once);

    html! {
        <section id="team" class="team-section">
            <div class="section-container">
                <div class="team-heading">
                    <h2>
                        <span class="title">{"הצוות המשפטי שלנו"}</span>
                        <span class="underline"></span>
                    </h2>
                    <p>{"צוות עורכי הדין המנוסה שלנו מתמחה בליווי משפטי מקיף לחברות בתעשיית המזון"}</p>
                </div>

                <div ref={grid_ref} class={classes!("team-grid", "reveal", visible.then(|| "visible"))}>
                    { for TEAM.iter().map(|member| html! {
                        <article key={member.name} class="team-card">
                            <div class="team-photo">
                                <div class="photo-tint"></div>
                                <img src={member.image} alt={member.name} loading="lazy" />
                            </div>
                            <div class="team-body">
                                <h3>{member.name}</h3>
                                <p class="position">{member.position}</p>
                                <div class="tags">
                                    { for member.specializations.iter().map(|spec| html! {
                                        <span key={*spec} class="tag">{*spec}</span>
                                    }) }
                                </div>
                                <p class="bio">{member.bio}</p>
                            </div>
                        </article>
                    }) }
                </div>

                <div class="section-cta">
                    <a href="#contact" class="pill-button primary">{"צור קשר עם הצוות שלנו"}</a>
                </div>
            </div>

            <style>
                {r#"
                .team-section {
                    padding: 4rem 1rem;
                    background: linear-gradient(135deg, #f9fafb, #f3f4f6);
                }

                .team-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .team-heading h2 {
                    position: relative;
                    display: inline-block;
                    font-size: 2.25rem;
                    color: #1f2937;
                    margin: 0 0 1rem;
                    animation: fadeDown 0.5s ease-out both;
                }

                .team-heading .title {
                    position: relative;
                    z-index: 1;
                }

                .team-heading .underline {
                    position: absolute;
                    bottom: -0.5rem;
                    right: 0;
                    width: 100%;
                    height: 0.75rem;
                    border-radius: 9999px;
                    background: var(--primary);
                    opacity: 0.2;
                }

                .team-heading p {
                    font-size: 1.25rem;
                    color: #4b5563;
                    max-width: 48rem;
                    margin: 0 auto;
                    animation: fadeIn 0.5s ease-out 0.2s both;
                }

                .team-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }

                .team-card {
                    background: #fff;
                    border-radius: 16px;
                    overflow: hidden;
                    box-shadow: var(--shadow-neumorphic);
                    transition: all 0.3s ease;
                }

                .team-card:hover {
                    transform: translateY(-10px);
                    box-shadow: var(--shadow-neumorphic-hover);
                }

                .team-photo {
                    position: relative;
                    height: 18rem;
                    overflow: hidden;
                }

                .team-photo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .photo-tint {
                    position: absolute;
                    inset: 0;
                    z-index: 1;
                    background: linear-gradient(to top, rgba(69, 183, 209, 0.2), transparent);
                }

                .team-body {
                    padding: 1.5rem;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(4px);
                }

                .team-body h3 {
                    margin: 0 0 0.25rem;
                    font-size: 1.5rem;
                    color: #1f2937;
                }

                .team-body .position {
                    margin: 0 0 0.75rem;
                    color: var(--secondary);
                    font-weight: 500;
                }

                .tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                }

                .tag {
                    font-size: 0.75rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: rgba(69, 183, 209, 0.1);
                    color: var(--primary);
                }

                .team-body .bio {
                    font-size: 0.875rem;
                    color: #4b5563;
                }

                @media (max-width: 1024px) {
                    .team-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 768px) {
                    .team-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
