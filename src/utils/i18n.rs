// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================
// RU es el idioma del producto; EN como alternativa. Las claves sin
// traducción se devuelven tal cual (así se muestra texto del servidor).
// ============================================================================

use std::collections::HashMap;

/// Idiomas disponibles en el selector
pub const LANGUAGES: [&str; 2] = ["RU", "EN"];

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();

    match lang.to_uppercase().as_str() {
        "EN" => {
            translations.insert("loading", "Loading...");
            translations.insert("footer", "© 2025 OilGas Booking. All rights reserved.");
            translations.insert("language", "Language");
            translations.insert("home_tagline", "Book services from oil and gas companies");
            translations.insert("nav_companies", "My companies");
            translations.insert("nav_my_services", "My services");
            translations.insert("nav_my_bookings", "My bookings");
            translations.insert("nav_search", "Find a service");
            translations.insert("nav_admin", "Admin");
            translations.insert("nav_profile", "Profile");
            translations.insert("nav_logout", "Log out");
            translations.insert("login_title", "Sign in");
            translations.insert("login_submit", "Sign in");
            translations.insert("signing_in", "Signing in...");
            translations.insert("login_link", "Sign in");
            translations.insert("no_account", "No account? ");
            translations.insert("register_title", "Create account");
            translations.insert("register_submit", "Register");
            translations.insert("registering", "Registering...");
            translations.insert("register_link", "Register");
            translations.insert("have_account", "Already registered? ");
            translations.insert("email", "Email");
            translations.insert("password", "Password");
            translations.insert("name", "Name");
            translations.insert("role", "Role");
            translations.insert("role_customer", "Customer");
            translations.insert("role_admin", "Administrator");
            translations.insert("user_id", "User ID");
            translations.insert("user_id_optional", "User ID (optional)");
            translations.insert("profile_title", "Profile");
            translations.insert("id", "ID");
            translations.insert("actions", "Actions");
            translations.insert("create", "Create");
            translations.insert("save", "Save");
            translations.insert("saving", "Saving...");
            translations.insert("cancel", "Cancel");
            translations.insert("edit", "Edit");
            translations.insert("delete", "Delete");
            translations.insert("remove", "Remove");
            translations.insert("details", "Details");
            translations.insert("companies_title", "My companies");
            translations.insert("company", "Company");
            translations.insert("company_name", "Company name");
            translations.insert("company_name_placeholder", "e.g. Arctic Drilling");
            translations.insert("no_companies", "You have no companies yet");
            translations.insert("confirm_delete_company", "Delete this company?");
            translations.insert("services_title", "Services");
            translations.insert("service_title", "Service");
            translations.insert("service_title_placeholder", "e.g. Drilling");
            translations.insert("price", "Price");
            translations.insert("no_services", "No services yet");
            translations.insert("my_services_title", "My services");
            translations.insert("add_service", "Add service");
            translations.insert("need_company_first", "Create a company first: ");
            translations.insert("no_company_services", "Your companies offer no services yet");
            translations.insert("confirm_unbind_service", "Remove this service from the company?");
            translations.insert("search_title", "Find a service");
            translations.insert("search_placeholder", "Type a service name");
            translations.insert("search", "Search");
            translations.insert("searching", "Searching...");
            translations.insert("service_not_found", "No companies offer this service");
            translations.insert("companies_offering", "Companies offering \"{service}\"");
            translations.insert("book", "Book");
            translations.insert("booking_in_progress", "Booking...");
            translations.insert("booking_created", "Booking #{id} created with \"{company}\". ");
            translations.insert("open_booking", "Open");
            translations.insert("bookings_title", "Bookings");
            translations.insert("new_booking", "New booking");
            translations.insert("no_bookings", "No bookings");
            translations.insert("status", "Status");
            translations.insert("description", "Description");
            translations.insert("my_bookings_title", "My bookings");
            translations.insert("filter_bookings", "Filter by number, status or description");
            translations.insert("sort_newest", "Newest first");
            translations.insert("sort_oldest", "Oldest first");
            translations.insert("found_of", "Found: {shown} of {total}");
            translations.insert("cancel_booking", "Cancel");
            translations.insert("confirm_delete_booking", "Cancel this booking?");
            translations.insert("booking_title", "Booking #{id}");
            translations.insert("back_to_my_bookings", "← My bookings");
            translations.insert("no_description", "No description");
            translations.insert("booking_services", "Booked services");
            translations.insert("no_booking_services", "No services in this booking yet");
            translations.insert("company_service_id", "Company service ID");
            translations.insert("notes", "Notes");
            translations.insert("booking_saved", "Booking #{id} created. ");
            translations.insert("admin_title", "Administration");
            translations.insert("admin_users_title", "Users");
            translations.insert("admin_users_hint", "List and remove users");
            translations.insert("analytics_title", "Analytics");
            translations.insert("analytics_hint", "Users with active bookings");
            translations.insert("admin_bookings_hint", "All bookings");
            translations.insert("admin_services_hint", "Service catalog");
            translations.insert("back_to_admin", "← Administration");
            translations.insert("back_to_users", "← Users");
            translations.insert("no_users", "No users");
            translations.insert("confirm_delete_user", "Delete this user?");
            translations.insert("no_active_users", "No users with active bookings");
            translations.insert("active_bookings", "Active bookings");
            translations.insert("analytics_summary", "Users: {users}, active bookings: {bookings}");
            translations.insert("user_bookings_title", "Bookings of user #{id}");
            translations.insert("fill_all_fields", "Please fill in all fields");
            translations.insert("login_failed", "Invalid email or password");
            translations.insert("register_failed", "Registration failed");
            translations.insert("profile_load_failed", "Could not load profile");
            translations.insert("companies_load_failed", "Could not load companies");
            translations.insert("company_action_failed", "Could not save the company");
            translations.insert("company_name_required", "Enter a company name");
            translations.insert("company_required", "Select a company");
            translations.insert("services_load_failed", "Could not load services");
            translations.insert("my_services_load_failed", "Could not load your services");
            translations.insert("service_action_failed", "Could not save the service");
            translations.insert("service_title_required", "Enter a service name");
            translations.insert("enter_service_name", "Enter a service name");
            translations.insert("search_failed", "Search failed");
            translations.insert("booking_failed", "Could not create the booking");
            translations.insert("bookings_load_failed", "Could not load bookings");
            translations.insert("booking_load_failed", "Could not load the booking");
            translations.insert("booking_delete_failed", "Could not cancel the booking");
            translations.insert("booking_service_failed", "Could not add the service");
            translations.insert("booking_reload_failed", "Service added, but the booking could not be refreshed");
            translations.insert("company_service_id_required", "Enter a numeric company service ID");
            translations.insert("user_id_invalid", "User ID must be a number");
            translations.insert("users_load_failed", "Could not load users");
            translations.insert("user_delete_failed", "Could not delete the user");
            translations.insert("analytics_load_failed", "Could not load analytics");
        }
        _ => {
            translations.insert("loading", "Загрузка...");
            translations.insert("footer", "© 2025 OilGas Booking. Все права защищены.");
            translations.insert("language", "Язык");
            translations.insert("home_tagline", "Бронирование услуг нефтегазовых компаний");
            translations.insert("nav_companies", "Мои компании");
            translations.insert("nav_my_services", "Мои услуги");
            translations.insert("nav_my_bookings", "Мои брони");
            translations.insert("nav_search", "Поиск услуги");
            translations.insert("nav_admin", "Админка");
            translations.insert("nav_profile", "Личный кабинет");
            translations.insert("nav_logout", "Выход");
            translations.insert("login_title", "Вход");
            translations.insert("login_submit", "Войти");
            translations.insert("signing_in", "Вход...");
            translations.insert("login_link", "Войти");
            translations.insert("no_account", "Нет аккаунта? ");
            translations.insert("register_title", "Регистрация");
            translations.insert("register_submit", "Зарегистрироваться");
            translations.insert("registering", "Регистрация...");
            translations.insert("register_link", "Зарегистрироваться");
            translations.insert("have_account", "Уже есть аккаунт? ");
            translations.insert("email", "Email");
            translations.insert("password", "Пароль");
            translations.insert("name", "Имя");
            translations.insert("role", "Роль");
            translations.insert("role_customer", "Клиент");
            translations.insert("role_admin", "Администратор");
            translations.insert("user_id", "ID пользователя");
            translations.insert("user_id_optional", "ID пользователя (необязательно)");
            translations.insert("profile_title", "Личный кабинет");
            translations.insert("id", "ID");
            translations.insert("actions", "Действия");
            translations.insert("create", "Создать");
            translations.insert("save", "Сохранить");
            translations.insert("saving", "Сохранение...");
            translations.insert("cancel", "Отмена");
            translations.insert("edit", "Изменить");
            translations.insert("delete", "Удалить");
            translations.insert("remove", "Убрать");
            translations.insert("details", "Подробнее");
            translations.insert("companies_title", "Мои компании");
            translations.insert("company", "Компания");
            translations.insert("company_name", "Название компании");
            translations.insert("company_name_placeholder", "Например, Arctic Drilling");
            translations.insert("no_companies", "У вас пока нет компаний");
            translations.insert("confirm_delete_company", "Удалить компанию?");
            translations.insert("services_title", "Услуги");
            translations.insert("service_title", "Услуга");
            translations.insert("service_title_placeholder", "Например, Бурение");
            translations.insert("price", "Цена");
            translations.insert("no_services", "Услуг пока нет");
            translations.insert("my_services_title", "Мои услуги");
            translations.insert("add_service", "Добавить услугу");
            translations.insert("need_company_first", "Сначала создайте компанию: ");
            translations.insert("no_company_services", "Ваши компании пока не предлагают услуг");
            translations.insert("confirm_unbind_service", "Убрать услугу из компании?");
            translations.insert("search_title", "Поиск услуги");
            translations.insert("search_placeholder", "Введите название услуги");
            translations.insert("search", "Найти");
            translations.insert("searching", "Поиск...");
            translations.insert("service_not_found", "Компании с такой услугой не найдены");
            translations.insert("companies_offering", "Компании, предлагающие «{service}»");
            translations.insert("book", "Забронировать");
            translations.insert("booking_in_progress", "Бронирование...");
            translations.insert("booking_created", "Создано бронирование #{id} в компании «{company}». ");
            translations.insert("open_booking", "Открыть");
            translations.insert("bookings_title", "Бронирования");
            translations.insert("new_booking", "Новое бронирование");
            translations.insert("no_bookings", "Бронирований нет");
            translations.insert("status", "Статус");
            translations.insert("description", "Описание");
            translations.insert("my_bookings_title", "Мои брони");
            translations.insert("filter_bookings", "Поиск по номеру, статусу или описанию");
            translations.insert("sort_newest", "Сначала новые");
            translations.insert("sort_oldest", "Сначала старые");
            translations.insert("found_of", "Найдено: {shown} из {total}");
            translations.insert("cancel_booking", "Отменить");
            translations.insert("confirm_delete_booking", "Отменить бронирование?");
            translations.insert("booking_title", "Бронирование #{id}");
            translations.insert("back_to_my_bookings", "← Мои брони");
            translations.insert("no_description", "Без описания");
            translations.insert("booking_services", "Услуги в бронировании");
            translations.insert("no_booking_services", "В бронировании пока нет услуг");
            translations.insert("company_service_id", "ID услуги компании");
            translations.insert("notes", "Примечание");
            translations.insert("booking_saved", "Бронирование #{id} создано. ");
            translations.insert("admin_title", "Админка");
            translations.insert("admin_users_title", "Пользователи");
            translations.insert("admin_users_hint", "Список пользователей и удаление");
            translations.insert("analytics_title", "Аналитика");
            translations.insert("analytics_hint", "Пользователи с активными бронированиями");
            translations.insert("admin_bookings_hint", "Все бронирования");
            translations.insert("admin_services_hint", "Каталог услуг");
            translations.insert("back_to_admin", "← Админка");
            translations.insert("back_to_users", "← Пользователи");
            translations.insert("no_users", "Пользователей нет");
            translations.insert("confirm_delete_user", "Удалить пользователя?");
            translations.insert("no_active_users", "Нет пользователей с активными бронированиями");
            translations.insert("active_bookings", "Активные брони");
            translations.insert("analytics_summary", "Пользователей: {users}, активных броней: {bookings}");
            translations.insert("user_bookings_title", "Бронирования пользователя #{id}");
            translations.insert("fill_all_fields", "Заполните все поля");
            translations.insert("login_failed", "Неверный email или пароль");
            translations.insert("register_failed", "Не удалось зарегистрироваться");
            translations.insert("profile_load_failed", "Не удалось загрузить профиль");
            translations.insert("companies_load_failed", "Не удалось загрузить компании");
            translations.insert("company_action_failed", "Не удалось сохранить компанию");
            translations.insert("company_name_required", "Введите название компании");
            translations.insert("company_required", "Выберите компанию");
            translations.insert("services_load_failed", "Не удалось загрузить услуги");
            translations.insert("my_services_load_failed", "Не удалось загрузить ваши услуги");
            translations.insert("service_action_failed", "Не удалось сохранить услугу");
            translations.insert("service_title_required", "Введите название услуги");
            translations.insert("enter_service_name", "Введите название услуги");
            translations.insert("search_failed", "Ошибка поиска");
            translations.insert("booking_failed", "Не удалось создать бронирование");
            translations.insert("bookings_load_failed", "Не удалось загрузить бронирования");
            translations.insert("booking_load_failed", "Не удалось загрузить бронирование");
            translations.insert("booking_delete_failed", "Не удалось отменить бронирование");
            translations.insert("booking_service_failed", "Не удалось добавить услугу");
            translations.insert("booking_reload_failed", "Услуга добавлена, но обновить бронирование не удалось");
            translations.insert("company_service_id_required", "Укажите числовой ID услуги компании");
            translations.insert("user_id_invalid", "ID пользователя должен быть числом");
            translations.insert("users_load_failed", "Не удалось загрузить пользователей");
            translations.insert("user_delete_failed", "Не удалось удалить пользователя");
            translations.insert("analytics_load_failed", "Не удалось загрузить аналитику");
        }
    }

    translations
}

/// Función de traducción; la clave si no se encuentra traducción
pub fn t(key: &str, lang: &str) -> String {
    get_translations(lang)
        .get(key)
        .map(|s| s.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Traducción con parámetros `{nombre}`
pub fn tf(key: &str, lang: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(t(key, lang), |text, (name, value)| {
        text.replace(&format!("{{{}}}", name), value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn russian_is_the_default() {
        assert_eq!(t("nav_logout", "RU"), "Выход");
        assert_eq!(t("nav_logout", "xx"), "Выход");
        assert_eq!(t("nav_logout", "en"), "Log out");
    }

    #[test]
    fn unknown_keys_fall_through() {
        assert_eq!(t("user with this email already exists", "RU"), "user with this email already exists");
    }

    #[test]
    fn placeholders_are_filled() {
        assert_eq!(
            tf("found_of", "RU", &[("shown", "2"), ("total", "5")]),
            "Найдено: 2 из 5"
        );
    }

    #[test]
    fn both_languages_cover_the_same_keys() {
        let ru = get_translations("RU");
        let en = get_translations("EN");
        let mut missing: Vec<_> = ru.keys().filter(|k| !en.contains_key(*k)).collect();
        missing.sort();
        assert!(missing.is_empty(), "faltan en EN: {:?}", missing);
        assert_eq!(ru.len(), en.len());
    }
}
