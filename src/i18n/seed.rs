//! Built-in UI copy for the landing page.
//!
//! Loaded into the store once at startup. Each supported language carries the
//! same key set as the canonical language; `SeedValidator` checks that.

use crate::i18n::Language;

/// One seeded (language, key, value) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedEntry {
    pub lang: Language,
    pub key: &'static str,
    pub value: &'static str,
}

const fn entry(lang: Language, key: &'static str, value: &'static str) -> SeedEntry {
    SeedEntry { lang, key, value }
}

const EN: Language = Language::ENGLISH;
const VI: Language = Language::VIETNAMESE;

/// The full bilingual table, English first.
pub fn seed_entries() -> &'static [SeedEntry] {
    SEED
}

#[rustfmt::skip]
static SEED: &[SeedEntry] = &[
    // English
    entry(EN, "brand.name", "TikTok Ads Pro"),
    entry(EN, "nav.about", "About Us"),
    entry(EN, "nav.services", "Services"),
    entry(EN, "nav.work", "Our Work"),
    entry(EN, "nav.testimonials", "Testimonials"),
    entry(EN, "nav.contact", "Contact"),
    entry(EN, "cta.get_in_touch", "GET IN TOUCH"),
    entry(EN, "hero.tagline", "TIKTOK ADS SPECIALISTS"),
    entry(EN, "hero.title_1", "Driving brand"),
    entry(EN, "hero.title_2", "growth on"),
    entry(EN, "hero.title_highlight", "meaningful"),
    entry(EN, "hero.title_3", "platforms"),
    entry(EN, "hero.description", "We help you design effective sales channels on the world's most influential platforms and drive revenue through organic discovery and paid campaigns."),
    entry(EN, "hero.trustpilot", "Review us on Trustpilot"),
    entry(EN, "hero.trusted_by", "Trusted by industry leaders"),
    entry(EN, "services.tagline", "OUR SOLUTIONS"),
    entry(EN, "services.title", "Grow your presence & drive revenue from scalable campaigns."),
    entry(EN, "platforms.tiktok.name", "TikTok"),
    entry(EN, "platforms.tiktok.description", "TikTok is no longer simply an entertainment platform, but a solid commercial channel as well. Check out the campaign #TikTokmademebuyt to see for yourself."),
    entry(EN, "platforms.tiktok.cta", "DISCOVER TIKTOK ADS"),
    entry(EN, "platforms.google.name", "Google"),
    entry(EN, "platforms.google.description", "The most used search engine on the planet is the most relevant & reliable platform to establish your presence and target audience who are actively looking to buy your products."),
    entry(EN, "platforms.google.cta", "DISCOVER GOOGLE ADS"),
    entry(EN, "platforms.microsoft.name", "Microsoft"),
    entry(EN, "platforms.microsoft.description", "With the second-largest share in the search engine market and a powerful ecosystem, Microsoft advertising is a must-solution that businesses only advertise on Google cannot miss!"),
    entry(EN, "platforms.microsoft.cta", "DISCOVER MICROSOFT ADS"),
    entry(EN, "platforms.facebook.name", "Facebook"),
    entry(EN, "platforms.facebook.description", "Rich communities, deep advertising capabilities and a large user base make Facebook an ideal channel to foster new customer relationships and grow your brand globally."),
    entry(EN, "platforms.facebook.cta", "DISCOVER FACEBOOK ADS"),
    entry(EN, "partners.tagline", "STRATEGIC PARTNERS"),
    entry(EN, "partners.title", "The reason why brands choose us."),
    entry(EN, "testimonials.tagline", "TESTIMONIALS"),
    entry(EN, "testimonials.title", "Don't just take our words for it, take our customers'."),
    entry(EN, "insights.tagline", "OUR THOUGHTS"),
    entry(EN, "insights.title", "Latest news & industry insights"),
    entry(EN, "insights.read_all", "READ ALL ARTICLES"),
    entry(EN, "contact.title", "Ready to talk growth?"),
    entry(EN, "contact.description", "Let's discuss how we can help scale your business with effective TikTok advertising campaigns."),
    entry(EN, "form.name_label", "Full Name *"),
    entry(EN, "form.name_placeholder", "Your full name"),
    entry(EN, "form.email_label", "Email Address *"),
    entry(EN, "form.email_placeholder", "your.email@company.com"),
    entry(EN, "form.company_label", "Company"),
    entry(EN, "form.company_placeholder", "Your company name"),
    entry(EN, "form.service_label", "Interested Service"),
    entry(EN, "form.service_placeholder", "Select a service"),
    entry(EN, "form.tiktok_ads", "TikTok Advertising"),
    entry(EN, "form.google_ads", "Google Ads Management"),
    entry(EN, "form.microsoft_ads", "Microsoft Advertising"),
    entry(EN, "form.facebook_ads", "Facebook Advertising"),
    entry(EN, "form.consultation", "Strategy Consultation"),
    entry(EN, "form.message_label", "Message *"),
    entry(EN, "form.message_placeholder", "Tell us about your project and goals..."),
    entry(EN, "form.submit_button", "Send Message"),
    entry(EN, "form.privacy_notice", "By submitting this form, you agree to our privacy policy and terms of service."),

    // Vietnamese
    entry(VI, "brand.name", "TikTok Ads Pro"),
    entry(VI, "nav.about", "Về Chúng Tôi"),
    entry(VI, "nav.services", "Dịch Vụ"),
    entry(VI, "nav.work", "Công Việc"),
    entry(VI, "nav.testimonials", "Đánh Giá"),
    entry(VI, "nav.contact", "Liên Hệ"),
    entry(VI, "cta.get_in_touch", "LIÊN HỆ NGAY"),
    entry(VI, "hero.tagline", "CHUYÊN GIA QUẢNG CÁO TIKTOK"),
    entry(VI, "hero.title_1", "Thúc đẩy thương hiệu"),
    entry(VI, "hero.title_2", "phát triển trên các"),
    entry(VI, "hero.title_highlight", "nền tảng"),
    entry(VI, "hero.title_3", "có ý nghĩa"),
    entry(VI, "hero.description", "Chúng tôi giúp bạn thiết kế các kênh bán hàng hiệu quả trên những nền tảng có tầm ảnh hưởng nhất thế giới và tăng doanh thu thông qua khám phá tự nhiên và các chiến dịch trả phí."),
    entry(VI, "hero.trustpilot", "Đánh giá chúng tôi trên Trustpilot"),
    entry(VI, "hero.trusted_by", "Được tin tưởng bởi các nhà lãnh đạo ngành"),
    entry(VI, "services.tagline", "GIẢI PHÁP CỦA CHÚNG TÔI"),
    entry(VI, "services.title", "Phát triển sự hiện diện & tăng doanh thu từ các chiến dịch có thể mở rộng."),
    entry(VI, "platforms.tiktok.name", "TikTok"),
    entry(VI, "platforms.tiktok.description", "TikTok không còn chỉ đơn thuần là một nền tảng giải trí, mà còn là một kênh thương mại vững chắc. Hãy xem chiến dịch #TikTokmademebuyt để tự mình thấy."),
    entry(VI, "platforms.tiktok.cta", "KHÁM PHÁ QUẢNG CÁO TIKTOK"),
    entry(VI, "platforms.google.name", "Google"),
    entry(VI, "platforms.google.description", "Công cụ tìm kiếm được sử dụng nhiều nhất trên hành tinh là nền tảng liên quan và đáng tin cậy nhất để thiết lập sự hiện diện của bạn và nhắm mục tiêu đối tượng đang tích cực tìm mua sản phẩm của bạn."),
    entry(VI, "platforms.google.cta", "KHÁM PHÁ QUẢNG CÁO GOOGLE"),
    entry(VI, "platforms.microsoft.name", "Microsoft"),
    entry(VI, "platforms.microsoft.description", "Với thị phần lớn thứ hai trong thị trường công cụ tìm kiếm và một hệ sinh thái mạnh mẽ, quảng cáo Microsoft là giải pháp bắt buộc mà các doanh nghiệp chỉ quảng cáo trên Google không thể bỏ lỡ!"),
    entry(VI, "platforms.microsoft.cta", "KHÁM PHÁ QUẢNG CÁO MICROSOFT"),
    entry(VI, "platforms.facebook.name", "Facebook"),
    entry(VI, "platforms.facebook.description", "Các cộng đồng phong phú, khả năng quảng cáo sâu sắc và cơ sở người dùng lớn khiến Facebook trở thành kênh lý tưởng để nuôi dưỡng các mối quan hệ khách hàng mới và phát triển thương hiệu của bạn trên toàn cầu."),
    entry(VI, "platforms.facebook.cta", "KHÁM PHÁ QUẢNG CÁO FACEBOOK"),
    entry(VI, "partners.tagline", "ĐỐI TÁC CHIẾN LƯỢC"),
    entry(VI, "partners.title", "Lý do tại sao các thương hiệu chọn chúng tôi."),
    entry(VI, "testimonials.tagline", "ĐÁNH GIÁ"),
    entry(VI, "testimonials.title", "Đừng chỉ tin lời chúng tôi, hãy tin lời khách hàng của chúng tôi."),
    entry(VI, "insights.tagline", "SỨY NGHĨ CỦA CHÚNG TÔI"),
    entry(VI, "insights.title", "Tin tức mới nhất & thông tin chuyên sâu về ngành"),
    entry(VI, "insights.read_all", "ĐỌC TẤT CẢ BÀI VIẾT"),
    entry(VI, "contact.title", "Sẵn sàng thảo luận về sự phát triển?"),
    entry(VI, "contact.description", "Hãy thảo luận về cách chúng tôi có thể giúp mở rộng quy mô kinh doanh của bạn với các chiến dịch quảng cáo TikTok hiệu quả."),
    entry(VI, "form.name_label", "Họ và Tên *"),
    entry(VI, "form.name_placeholder", "Họ và tên của bạn"),
    entry(VI, "form.email_label", "Địa Chỉ Email *"),
    entry(VI, "form.email_placeholder", "email.cua.ban@congty.com"),
    entry(VI, "form.company_label", "Công Ty"),
    entry(VI, "form.company_placeholder", "Tên công ty của bạn"),
    entry(VI, "form.service_label", "Dịch Vụ Quan Tâm"),
    entry(VI, "form.service_placeholder", "Chọn một dịch vụ"),
    entry(VI, "form.tiktok_ads", "Quảng Cáo TikTok"),
    entry(VI, "form.google_ads", "Quản Lý Quảng Cáo Google"),
    entry(VI, "form.microsoft_ads", "Quảng Cáo Microsoft"),
    entry(VI, "form.facebook_ads", "Quảng Cáo Facebook"),
    entry(VI, "form.consultation", "Tư Vấn Chiến Lược"),
    entry(VI, "form.message_label", "Tin Nhắn *"),
    entry(VI, "form.message_placeholder", "Hãy cho chúng tôi biết về dự án và mục tiêu của bạn..."),
    entry(VI, "form.submit_button", "Gửi Tin Nhắn"),
    entry(VI, "form.privacy_notice", "Bằng cách gửi biểu mẫu này, bạn đồng ý với chính sách bảo mật và điều khoản dịch vụ của chúng tôi."),
];
