use yew::prelude::*;

use crate::catalog::CompanyInfo;
use crate::config;
use crate::icons::{Icon, IconView};

const VK_URL: &str = "https://vk.ru/liliyachudo18";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialStyle {
    Instagram,
    Vk,
    Telegram,
}

impl SocialStyle {
    fn hover_class(self) -> &'static str {
        match self {
            SocialStyle::Instagram => "social-link--instagram",
            SocialStyle::Vk => "social-link--vk",
            SocialStyle::Telegram => "social-link--telegram",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub name: &'static str,
    pub handle: String,
    pub url: String,
    pub icon: Icon,
    pub style: SocialStyle,
}

pub fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", digits)
}

fn instagram_url(handle: &str) -> String {
    format!("https://instagram.com/{}", handle.strip_prefix('@').unwrap_or(handle))
}

pub fn social_links(company: &CompanyInfo) -> [SocialLink; 3] {
    [
        SocialLink {
            name: "Instagram",
            handle: company.socials.instagram.clone(),
            url: instagram_url(&company.socials.instagram),
            icon: Icon::Instagram,
            style: SocialStyle::Instagram,
        },
        SocialLink {
            name: "VKontakte",
            handle: "vk.ru/liliyachudo18".to_string(),
            url: VK_URL.to_string(),
            icon: Icon::MessageCircle,
            style: SocialStyle::Vk,
        },
        SocialLink {
            name: "Telegram",
            handle: "@liliyachudo".to_string(),
            url: "https://t.me/liliyachudo".to_string(),
            icon: Icon::Send,
            style: SocialStyle::Telegram,
        },
    ]
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub company: CompanyInfo,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let links = social_links(&props.company);

    html! {
        <section id={config::CONTACT_ANCHOR} class="contact-section">
            <div class="contact-glow contact-glow--blue"></div>
            <div class="contact-glow contact-glow--pink"></div>

            <div class="section-container contact-container">
                <div class="section-header">
                    <span class="section-badge section-badge--blue">{"Контакты"}</span>
                    <h2>{"Свяжитесь с "}<span class="text-gradient">{"нами"}</span></h2>
                </div>

                <div class="contact-column">
                    <div class="contact-card">
                        <div class="contact-phone">
                            <div class="contact-phone-icon">
                                <IconView icon={Icon::Phone} />
                            </div>
                            <div>
                                <p class="contact-label">{"Телефон"}</p>
                                <a class="contact-phone-number" href={tel_href(&props.company.phone)}>
                                    {&props.company.phone}
                                </a>
                            </div>
                        </div>
                        <p class="contact-note">
                            {"Звоните или пишите в мессенджеры — мы на связи с 9:00 до 21:00"}
                        </p>
                    </div>

                    <div class="contact-card">
                        <h4>{"Мы в социальных сетях"}</h4>
                        <div class="social-list">
                            { for links.iter().map(|social| html! {
                                <a
                                    key={social.name}
                                    href={social.url.clone()}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class={classes!("social-link", social.style.hover_class())}
                                >
                                    <IconView icon={social.icon} class={classes!("social-icon")} />
                                    <div class="social-text">
                                        <p class="social-name">{social.name}</p>
                                        <p class="social-handle">{&social.handle}</p>
                                    </div>
                                    <IconView icon={Icon::ExternalLink} class={classes!("social-external")} />
                                </a>
                            }) }
                        </div>
                    </div>

                    <a class="reviews-cta" href={VK_URL} target="_blank" rel="noopener noreferrer">
                        <div>
                            <h4>{"Отзывы наших клиентов"}</h4>
                            <p>{"Более 15000 довольных клиентов — читайте отзывы в VK"}</p>
                        </div>
                        <IconView icon={Icon::ExternalLink} class={classes!("reviews-external")} />
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .contact-section {
                    position: relative;
                    overflow: hidden;
                    padding: 80px 0;
                    background: linear-gradient(135deg, #fdf2f8 0%, #eff6ff 100%);
                }
                .contact-glow {
                    position: absolute;
                    width: 384px;
                    height: 384px;
                    border-radius: 9999px;
                    filter: blur(64px);
                }
                .contact-glow--blue {
                    top: 0;
                    left: 0;
                    background: rgba(59, 130, 246, 0.05);
                    transform: translate(-50%, -50%);
                }
                .contact-glow--pink {
                    bottom: 0;
                    right: 0;
                    background: rgba(232, 87, 126, 0.05);
                    transform: translate(50%, 50%);
                }
                .contact-container {
                    position: relative;
                    z-index: 10;
                }
                .contact-column {
                    max-width: 672px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 32px;
                }
                .contact-card {
                    background: #ffffff;
                    border-radius: 24px;
                    box-shadow: 0 10px 24px rgba(0, 0, 0, 0.1);
                    padding: 32px;
                }
                .contact-card h4 {
                    font-size: 1.125rem;
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 16px;
                }
                .contact-phone {
                    display: flex;
                    align-items: center;
                    gap: 16px;
                    margin-bottom: 16px;
                }
                .contact-phone-icon {
                    width: 48px;
                    height: 48px;
                    border-radius: 12px;
                    background: #dcfce7;
                    color: #16a34a;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .contact-phone-icon .icon {
                    width: 24px;
                    height: 24px;
                }
                .contact-label {
                    font-size: 0.875rem;
                    color: #6b7280;
                }
                .contact-phone-number {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #111827;
                    text-decoration: none;
                    transition: color 0.3s;
                }
                .contact-phone-number:hover {
                    color: #e8577e;
                }
                .contact-note {
                    font-size: 0.875rem;
                    color: #4b5563;
                }
                .social-list {
                    display: flex;
                    flex-direction: column;
                    gap: 12px;
                }
                .social-link {
                    display: flex;
                    align-items: center;
                    gap: 16px;
                    padding: 16px;
                    border-radius: 12px;
                    border: 1px solid #f3f4f6;
                    color: #111827;
                    text-decoration: none;
                    transition: all 0.3s;
                }
                .social-link:hover {
                    color: #ffffff;
                }
                .social-link:hover .social-handle,
                .social-link:hover .social-external {
                    color: rgba(255, 255, 255, 0.8);
                }
                .social-link--instagram:hover {
                    background: linear-gradient(to bottom right, #a855f7, #ec4899, #f97316);
                }
                .social-link--vk:hover {
                    background: #3b82f6;
                }
                .social-link--telegram:hover {
                    background: #0ea5e9;
                }
                .social-icon {
                    width: 24px;
                    height: 24px;
                }
                .social-text {
                    flex: 1;
                }
                .social-name {
                    font-weight: 600;
                }
                .social-handle {
                    font-size: 0.875rem;
                    color: #6b7280;
                }
                .social-external {
                    width: 16px;
                    height: 16px;
                    color: #9ca3af;
                }
                .reviews-cta {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 32px;
                    border-radius: 24px;
                    background: linear-gradient(to right, #e8577e, #d9774b);
                    color: #ffffff;
                    text-decoration: none;
                    box-shadow: 0 10px 24px rgba(0, 0, 0, 0.1);
                    transition: all 0.3s;
                }
                .reviews-cta:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.15);
                }
                .reviews-cta h4 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin-bottom: 8px;
                }
                .reviews-cta p {
                    color: rgba(255, 255, 255, 0.8);
                }
                .reviews-external {
                    width: 24px;
                    height: 24px;
                    flex-shrink: 0;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Socials;

    fn company(phone: &str, instagram: &str) -> CompanyInfo {
        CompanyInfo {
            name: "Лилия Чудо".to_string(),
            phone: phone.to_string(),
            socials: Socials { instagram: instagram.to_string() },
        }
    }

    #[test]
    fn phone_link_drops_whitespace() {
        assert_eq!(tel_href("+7 900 000-00-00"), "tel:+7900000-00-00");
        assert_eq!(tel_href(" +7\t900\u{a0}000 "), "tel:+7900000");
    }

    #[test]
    fn three_socials_in_fixed_order() {
        let links = social_links(&company("+7 900 000-00-00", "@liliyachudo"));
        let names: Vec<&str> = links.iter().map(|l| l.name).collect();
        assert_eq!(names, ["Instagram", "VKontakte", "Telegram"]);
        assert!(links.iter().all(|l| l.url.starts_with("https://")));
    }

    #[test]
    fn instagram_handle_feeds_url() {
        let links = social_links(&company("1", "@liliyachudo"));
        assert_eq!(links[0].handle, "@liliyachudo");
        assert_eq!(links[0].url, "https://instagram.com/liliyachudo");

        let bare = social_links(&company("1", "liliyachudo"));
        assert_eq!(bare[0].url, "https://instagram.com/liliyachudo");
    }

    #[test]
    fn only_the_leading_at_sign_is_dropped() {
        assert_eq!(instagram_url("@li@ya"), "https://instagram.com/li@ya");
        assert_eq!(instagram_url("li@ya"), "https://instagram.com/li@ya");
    }

    #[test]
    fn each_network_has_its_own_hover_style() {
        let links = social_links(&company("1", "x"));
        assert_eq!(links[0].style.hover_class(), "social-link--instagram");
        assert_eq!(links[1].style.hover_class(), "social-link--vk");
        assert_eq!(links[2].style.hover_class(), "social-link--telegram");
    }
}
