use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::listeners::scroll_to_anchor;
use crate::sections::{
    about::AboutSection, contact::ContactSection, cta::CtaSection, expertise::ExpertiseSection,
    faq::FaqSection, hero::HeroSection, services::ServicesSection, team::TeamSection,
    testimonials::TestimonialsSection,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    let to_contact = Callback::from(|_: ()| {
        scroll_to_anchor("contact");
    });

    html! {
        <div class="landing-page">
            <Header />
            <main>
                <HeroSection on_cta_click={to_contact} />
                <AboutSection />
                <ExpertiseSection />
                <ServicesSection />
                <TeamSection />
                <TestimonialsSection />
                <CtaSection />
                <FaqSection />
                <ContactSection />
            </main>
            <Footer />
        </div>
    }
}
