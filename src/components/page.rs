//! Page renderer.
//!
//! Shows the view for the active section. After every render it reports the
//! bindable regions of the new view to the orchestrator, so animation
//! bindings always match what is on the page.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::sections::{
    About, CONTACT_DETAIL_COUNT, ClientsAndPartners, Contact, GET_IN_TOUCH, Home, Services,
    Solutions, TRUSTED_BY, groups,
};
use crate::core::animation::Region;
use crate::models::{ContentRegistry, Section};

stylance::import_crate_style!(css, "src/components/page.module.css");

/// Bindable regions rendered for `section`.
///
/// Card counts come from the same content the views iterate, so every card
/// region matches the cards on the page.
pub fn regions(section: Section, content: &ContentRegistry) -> Vec<Region> {
    let anchor = section.anchor();
    let mut regions = vec![Region::Section { anchor }];
    match section {
        Section::Home => {
            regions.push(Region::Hero { anchor });
            regions.push(Region::Section { anchor: TRUSTED_BY });
            regions.push(Region::Section {
                anchor: GET_IN_TOUCH,
            });
        }
        Section::About => regions.push(Region::Cards {
            scope: anchor,
            group: groups::PANEL,
            count: content.about.len(),
        }),
        Section::Services => regions.push(Region::Cards {
            scope: anchor,
            group: groups::SERVICE,
            count: content.services.len(),
        }),
        Section::Solutions => regions.push(Region::Cards {
            scope: anchor,
            group: groups::SOLUTION,
            count: content.solution_count(),
        }),
        Section::ClientsAndPartners => {
            regions.push(Region::Cards {
                scope: anchor,
                group: groups::CLIENT,
                count: content.clients.len(),
            });
            regions.push(Region::Cards {
                scope: anchor,
                group: groups::PARTNER,
                count: content.partners.len(),
            });
        }
        Section::Contact => regions.push(Region::Cards {
            scope: anchor,
            group: groups::DETAIL,
            count: CONTACT_DETAIL_COUNT,
        }),
    }
    regions
}

/// Main content area.
#[component]
pub fn Page() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let active = Memo::new(move |_| ctx.nav.with(|nav| nav.active()));

    // Runs after the view below has re-rendered for the new section.
    Effect::new(move |prev: Option<Section>| {
        let section = active.get();
        if prev.is_some_and(|prev| prev != section) {
            // The previous view is already gone; release its triggers before
            // the scroll reset makes them update.
            ctx.release_bindings();
            ctx.scroll_to_top();
        }
        let present = ctx.content.with_value(|content| regions(section, content));
        // Wait a frame so layout reflects the new view before triggers measure it.
        request_animation_frame(move || ctx.regions_changed(&present));
        section
    });

    view! {
        <main class=css::main>
            {move || match active.get() {
                Section::Home => view! { <Home /> }.into_any(),
                Section::About => view! { <About /> }.into_any(),
                Section::Services => view! { <Services /> }.into_any(),
                Section::Solutions => view! { <Solutions /> }.into_any(),
                Section::ClientsAndPartners => view! { <ClientsAndPartners /> }.into_any(),
                Section::Contact => view! { <Contact /> }.into_any(),
            }}
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONTENT_TOML;

    fn content() -> ContentRegistry {
        ContentRegistry::parse(CONTENT_TOML).unwrap()
    }

    fn card_count(regions: &[Region]) -> usize {
        regions
            .iter()
            .map(|r| match r {
                Region::Cards { count, .. } => *count,
                _ => 0,
            })
            .sum()
    }

    #[test]
    fn test_every_section_reports_its_anchor_first() {
        let content = content();
        for section in Section::ALL {
            let regions = regions(section, &content);
            assert_eq!(
                regions.first(),
                Some(&Region::Section {
                    anchor: section.anchor()
                })
            );
        }
    }

    #[test]
    fn test_only_home_has_a_hero() {
        let content = content();
        for section in Section::ALL {
            let has_hero = regions(section, &content)
                .iter()
                .any(|r| matches!(r, Region::Hero { .. }));
            assert_eq!(has_hero, section == Section::Home);
        }
    }

    #[test]
    fn test_card_counts_follow_content() {
        let content = content();
        assert_eq!(card_count(&regions(Section::Services, &content)), 6);
        assert_eq!(card_count(&regions(Section::Solutions, &content)), 8);
        assert_eq!(card_count(&regions(Section::ClientsAndPartners, &content)), 19);
        assert_eq!(card_count(&regions(Section::About, &content)), 3);
    }

    #[test]
    fn test_empty_content_has_no_cards() {
        let empty = ContentRegistry::default();
        assert_eq!(card_count(&regions(Section::Services, &empty)), 0);
        assert_eq!(card_count(&regions(Section::ClientsAndPartners, &empty)), 0);
    }

    #[test]
    fn test_card_scopes_are_the_section_anchor() {
        let content = content();
        for section in Section::ALL {
            for region in regions(section, &content) {
                if let Region::Cards { scope, .. } = region {
                    assert_eq!(scope, section.anchor());
                }
            }
        }
    }
}
