use std::rc::Rc;

use yew::prelude::*;

use crate::catalog::{Catalog, Service, ServiceId};
use crate::config;
use crate::icons::{Icon, IconView, ImagePlaceholderGlyph};
use crate::scroll;
use crate::selection::{Reveal, Selection};

fn card_class(is_active: bool) -> &'static str {
    if is_active {
        "service-card service-card--active"
    } else {
        "service-card service-card--idle"
    }
}

fn card_icon_class(is_active: bool) -> &'static str {
    if is_active {
        "service-icon service-icon--filled"
    } else {
        "service-icon service-icon--pale"
    }
}

fn action_label(is_active: bool) -> &'static str {
    if is_active { "Свернуть" } else { "Подробнее" }
}

fn image_alt(title: &str, index: usize) -> String {
    format!("{} {}", title, index + 1)
}

fn placeholder_label(index: usize) -> String {
    format!("Фото {}", index + 1)
}

fn active_service(catalog: &Catalog, selection: Selection) -> Option<&Service> {
    selection.selected().and_then(|id| catalog.find(id))
}

/// What one gallery cell shows, decided only by that cell's own load state.
#[derive(Debug, PartialEq)]
enum GalleryCellView {
    Image { src: String, alt: String },
    Placeholder { label: String },
}

impl GalleryCellView {
    fn new(failed: bool, src: &str, title: &str, index: usize) -> Self {
        if failed {
            GalleryCellView::Placeholder { label: placeholder_label(index) }
        } else {
            GalleryCellView::Image { src: src.to_string(), alt: image_alt(title, index) }
        }
    }
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: Service,
    is_active: bool,
    on_click: Callback<ServiceId>,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let onclick = {
        let on_click = props.on_click.clone();
        let id = props.service.id;
        Callback::from(move |_: MouseEvent| on_click.emit(id))
    };

    html! {
        <div class={card_class(props.is_active)} {onclick}>
            <div class={card_icon_class(props.is_active)}>
                <IconView icon={Icon::Service(props.service.icon)} />
            </div>
            <h3 class="service-card-title">{&props.service.title}</h3>
            <p class="service-card-summary">{&props.service.short_description}</p>
            <div class="service-card-action">
                <span>{action_label(props.is_active)}</span>
                <IconView
                    icon={Icon::ChevronDown}
                    class={classes!("chevron", props.is_active.then(|| "chevron--open"))}
                />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct GalleryCellProps {
    src: String,
    title: String,
    index: usize,
}

// A broken image only swaps its own cell for a numbered placeholder.
#[function_component(GalleryCell)]
fn gallery_cell(props: &GalleryCellProps) -> Html {
    let failed = use_state(|| false);

    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| failed.set(true))
    };

    let content = match GalleryCellView::new(*failed, &props.src, &props.title, props.index) {
        GalleryCellView::Placeholder { label } => html! {
            <div class="gallery-placeholder">
                <ImagePlaceholderGlyph />
                <span class="gallery-placeholder-label">{label}</span>
            </div>
        },
        GalleryCellView::Image { src, alt } => html! {
            <img src={src} alt={alt} loading="lazy" {onerror} />
        },
    };

    html! {
        <div class="gallery-cell">
            { content }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceDetailProps {
    service: Service,
    features_ref: NodeRef,
    on_close: Callback<()>,
}

#[function_component(ServiceDetail)]
fn service_detail(props: &ServiceDetailProps) -> Html {
    let onclose = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let to_contact = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll::scroll_to_anchor(config::CONTACT_ANCHOR);
    });

    let service = &props.service;

    html! {
        <div class="service-detail">
            <div class="service-detail-header">
                <div class="service-detail-heading">
                    <div class="service-icon service-icon--filled">
                        <IconView icon={Icon::Service(service.icon)} />
                    </div>
                    <div>
                        <h3>{&service.title}</h3>
                        <p>{&service.short_description}</p>
                    </div>
                </div>
                <button class="service-detail-close" onclick={onclose} aria-label="Закрыть">
                    <IconView icon={Icon::Close} />
                </button>
            </div>

            <div class="service-detail-body">
                <p class="service-detail-description">{&service.description}</p>

                <div class="service-features" ref={props.features_ref.clone()}>
                    <div class="service-features-heading">
                        <div class="service-features-badge">
                            <IconView icon={Icon::Check} />
                        </div>
                        <h4>{"Что входит в услугу"}</h4>
                    </div>
                    <ul>
                        { for service.features.iter().enumerate().map(|(index, feature)| html! {
                            <li key={index}>
                                <span class="feature-check"><IconView icon={Icon::Check} /></span>
                                <span>{feature}</span>
                            </li>
                        }) }
                    </ul>
                </div>

                <div class="service-gallery">
                    <h4>{"Галерея:"}</h4>
                    <div class="gallery-grid">
                        { for service.gallery.iter().enumerate().map(|(index, src)| html! {
                            // Keyed by source too, so a failed cell does not carry over to another service.
                            <GalleryCell
                                key={format!("{}-{}", index, src)}
                                src={src.clone()}
                                title={service.title.clone()}
                                index={index}
                            />
                        }) }
                    </div>
                </div>

                <div class="service-detail-cta">
                    <a href={format!("#{}", config::CONTACT_ANCHOR)} onclick={to_contact}>
                        {"Узнать стоимость"}
                        <IconView icon={Icon::ArrowDown} />
                    </a>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub catalog: Rc<Catalog>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let selection = use_state(Selection::default);
    let detail_ref = use_node_ref();
    let features_ref = use_node_ref();
    let last_seen = use_mut_ref(Selection::default);

    {
        let detail_ref = detail_ref.clone();
        let features_ref = features_ref.clone();
        use_effect_with_deps(
            move |current: &Selection| {
                let previous = last_seen.replace(*current);
                match previous.reveal_on(*current) {
                    Reveal::Nothing => {}
                    Reveal::Detail => {
                        scroll::scroll_into_view_after(detail_ref, config::SCROLL_SETTLE_MS);
                    }
                    Reveal::DetailAndFeatures => {
                        scroll::scroll_into_view_after(detail_ref, config::SCROLL_SETTLE_MS);
                        scroll::scroll_into_view_after(features_ref, config::SCROLL_SETTLE_MS);
                    }
                }
                || ()
            },
            *selection,
        );
    }

    let on_card_click = {
        let selection = selection.clone();
        Callback::from(move |id: ServiceId| {
            let next = (*selection).click(id);
            log::debug!("service card {} clicked: {:?} -> {:?}", id, *selection, next);
            selection.set(next);
        })
    };

    let on_close = {
        let selection = selection.clone();
        Callback::from(move |_: ()| selection.set((*selection).close()))
    };

    let active = active_service(&props.catalog, *selection);

    html! {
        <section id={config::SERVICES_ANCHOR} class="services-section">
            <div class="section-container">
                <div class="section-header">
                    <span class="section-badge section-badge--pink">{"Наши услуги"}</span>
                    <h2>{"Организуем "}<span class="text-gradient">{"любой праздник"}</span></h2>
                    <p>{"Выберите тип мероприятия, чтобы узнать подробнее о наших услугах"}</p>
                </div>

                <div class="services-grid">
                    { for props.catalog.services.iter().map(|service| html! {
                        <ServiceCard
                            key={service.id.0}
                            service={service.clone()}
                            is_active={selection.is_selected(service.id)}
                            on_click={on_card_click.clone()}
                        />
                    }) }
                </div>

                {
                    if let Some(service) = active {
                        html! {
                            <div class="service-detail-wrapper" ref={detail_ref.clone()}>
                                <ServiceDetail
                                    service={service.clone()}
                                    features_ref={features_ref.clone()}
                                    on_close={on_close}
                                />
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <style>
                {r#"
                .services-section {
                    padding: 80px 0;
                    background: #ffffff;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                    gap: 24px;
                }
                .service-card {
                    position: relative;
                    background: #ffffff;
                    border-radius: 24px;
                    padding: 24px;
                    cursor: pointer;
                    transition: all 0.5s ease-out;
                }
                .service-card--idle {
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                }
                .service-card--idle:hover {
                    box-shadow: 0 10px 24px rgba(0, 0, 0, 0.12);
                    transform: translateY(-4px);
                }
                .service-card--active {
                    box-shadow: 0 0 0 4px #e8577e, 0 20px 40px rgba(0, 0, 0, 0.15);
                    transform: scale(1.02);
                }
                .service-icon {
                    width: 56px;
                    height: 56px;
                    border-radius: 16px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 16px;
                    transition: background-color 0.3s, color 0.3s;
                    flex-shrink: 0;
                }
                .service-icon .icon {
                    width: 28px;
                    height: 28px;
                }
                .service-icon--filled {
                    background: #e8577e;
                    color: #ffffff;
                }
                .service-icon--pale {
                    background: #fdf2f8;
                    color: #e8577e;
                }
                .service-card-title {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 8px;
                }
                .service-card-summary {
                    color: #4b5563;
                    margin-bottom: 16px;
                    display: -webkit-box;
                    -webkit-line-clamp: 2;
                    -webkit-box-orient: vertical;
                    overflow: hidden;
                }
                .service-card-action {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    color: #e8577e;
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .chevron {
                    width: 20px;
                    height: 20px;
                    color: #9ca3af;
                    transition: transform 0.3s;
                }
                .chevron--open {
                    transform: rotate(180deg);
                    color: #e8577e;
                }
                .service-detail-wrapper {
                    margin-top: 48px;
                }
                .service-detail {
                    background: #ffffff;
                    border-radius: 24px;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.15);
                    overflow: hidden;
                    animation: detailIn 0.5s ease-out;
                }
                @keyframes detailIn {
                    from { opacity: 0; transform: translateY(16px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .service-detail-header {
                    display: flex;
                    align-items: flex-start;
                    justify-content: space-between;
                    gap: 16px;
                    padding: 32px;
                    background: linear-gradient(to right, rgba(232, 87, 126, 0.1), rgba(217, 119, 75, 0.1));
                }
                .service-detail-heading {
                    display: flex;
                    align-items: center;
                    gap: 16px;
                }
                .service-detail-heading .service-icon {
                    margin-bottom: 0;
                }
                .service-detail-close {
                    padding: 8px;
                    border: none;
                    border-radius: 9999px;
                    background: transparent;
                    color: #6b7280;
                    cursor: pointer;
                }
                .service-detail-close:hover {
                    background: rgba(255, 255, 255, 0.5);
                }
                .service-detail-close .icon {
                    width: 24px;
                    height: 24px;
                }
                .service-detail-body {
                    padding: 32px;
                }
                .service-detail-description {
                    font-size: 1.125rem;
                    color: #374151;
                    margin-bottom: 32px;
                }
                .service-features {
                    background: linear-gradient(to bottom right, #fdf2f8, rgba(252, 231, 243, 0.5));
                    border-radius: 16px;
                    padding: 32px;
                    margin-bottom: 32px;
                }
                .service-features-heading {
                    display: flex;
                    align-items: center;
                    gap: 12px;
                    margin-bottom: 24px;
                }
                .service-features-badge {
                    width: 40px;
                    height: 40px;
                    border-radius: 12px;
                    background: #e8577e;
                    color: #ffffff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .service-features ul {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                    gap: 16px;
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                .service-features li {
                    display: flex;
                    align-items: flex-start;
                    gap: 12px;
                    background: #ffffff;
                    border-radius: 12px;
                    padding: 16px;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    color: #374151;
                }
                .feature-check {
                    width: 24px;
                    height: 24px;
                    border-radius: 9999px;
                    background: #dcfce7;
                    color: #16a34a;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                }
                .feature-check .icon {
                    width: 16px;
                    height: 16px;
                }
                .gallery-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 12px;
                }
                @media (min-width: 768px) {
                    .gallery-grid {
                        grid-template-columns: repeat(6, 1fr);
                        gap: 16px;
                    }
                }
                .gallery-cell {
                    aspect-ratio: 1 / 1;
                    border-radius: 12px;
                    overflow: hidden;
                    background: #f3f4f6;
                }
                .gallery-cell img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s;
                }
                .gallery-cell img:hover {
                    transform: scale(1.1);
                }
                .gallery-placeholder {
                    width: 100%;
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(to bottom right, #fdf2f8, #fce7f3);
                }
                .gallery-placeholder-glyph {
                    width: 32px;
                    height: 32px;
                    color: rgba(232, 87, 126, 0.5);
                    margin-bottom: 4px;
                }
                .gallery-placeholder-label {
                    font-size: 0.75rem;
                    color: rgba(232, 87, 126, 0.7);
                }
                .service-detail-cta {
                    margin-top: 32px;
                    text-align: center;
                }
                .service-detail-cta a {
                    display: inline-flex;
                    align-items: center;
                    gap: 8px;
                    padding: 16px 32px;
                    background: #e8577e;
                    color: #ffffff;
                    font-weight: 600;
                    border-radius: 12px;
                    text-decoration: none;
                    transition: all 0.3s;
                }
                .service-detail-cta a:hover {
                    box-shadow: 0 0 24px rgba(232, 87, 126, 0.4);
                }
                .service-detail-cta .icon {
                    width: 20px;
                    height: 20px;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_card_gets_highlight_classes() {
        assert!(card_class(true).contains("service-card--active"));
        assert!(!card_class(false).contains("service-card--active"));
        assert_eq!(card_icon_class(true), "service-icon service-icon--filled");
        assert_eq!(card_icon_class(false), "service-icon service-icon--pale");
    }

    #[test]
    fn action_hint_follows_state() {
        assert_eq!(action_label(true), "Свернуть");
        assert_eq!(action_label(false), "Подробнее");
    }

    #[test]
    fn gallery_labels_are_one_based() {
        assert_eq!(placeholder_label(0), "Фото 1");
        assert_eq!(placeholder_label(4), "Фото 5");
        assert_eq!(image_alt("Свадьбы", 2), "Свадьбы 3");
    }

    #[test]
    fn only_selected_service_resolves_to_a_detail() {
        let catalog = Catalog::bundled().unwrap();
        let (x, y) = (catalog.services[0].id, catalog.services[1].id);

        assert!(active_service(&catalog, Selection::default()).is_none());

        let state = Selection::default().click(x).click(y);
        assert_eq!(active_service(&catalog, state).map(|s| s.id), Some(y));

        let state = state.click(y);
        assert!(active_service(&catalog, state).is_none());

        let state = Selection::default().click(x).close();
        assert!(active_service(&catalog, state).is_none());
    }

    #[test]
    fn selection_of_an_unknown_id_shows_no_detail() {
        let catalog = Catalog::bundled().unwrap();
        let state = Selection::default().click(ServiceId(u32::MAX));
        assert!(active_service(&catalog, state).is_none());
    }

    #[test]
    fn loaded_cell_shows_the_image() {
        assert_eq!(
            GalleryCellView::new(false, "/assets/gallery/kids-1.jpg", "Детские праздники", 0),
            GalleryCellView::Image {
                src: "/assets/gallery/kids-1.jpg".to_string(),
                alt: "Детские праздники 1".to_string(),
            }
        );
    }

    #[test]
    fn failed_cell_shows_numbered_placeholder() {
        assert_eq!(
            GalleryCellView::new(true, "/missing.jpg", "Свадьбы", 3),
            GalleryCellView::Placeholder { label: "Фото 4".to_string() }
        );
    }

    #[test]
    fn one_failed_image_leaves_other_cells_alone() {
        let catalog = Catalog::bundled().unwrap();
        let service = &catalog.services[0];
        let failed_index = 1;

        let cells: Vec<GalleryCellView> = service
            .gallery
            .iter()
            .enumerate()
            .map(|(index, src)| GalleryCellView::new(index == failed_index, src, &service.title, index))
            .collect();

        for (index, cell) in cells.iter().enumerate() {
            match cell {
                GalleryCellView::Placeholder { label } => {
                    assert_eq!(index, failed_index);
                    assert_eq!(label, "Фото 2");
                }
                GalleryCellView::Image { src, .. } => {
                    assert_ne!(index, failed_index);
                    assert_eq!(src, &service.gallery[index]);
                }
            }
        }
    }
}
