//! Static UI string tables.
//!
//! Lookup falls back to English and finally to the key itself, so a missing
//! entry degrades to something readable instead of an empty label.

use contracts::chat::Language;

/// Languages offered in the selection grid.
pub fn supported_languages() -> Vec<Language> {
    vec![
        Language::new("en", "English", "English"),
        Language::new("ar", "Arabic", "العربية"),
        Language::new("fr", "French", "Français"),
        Language::new("es", "Spanish", "Español"),
        Language::new("nl", "Dutch", "Nederlands"),
        Language::new("zh", "Chinese", "中文"),
    ]
}

/// Translate `key` into `language`.
pub fn translate(language: &str, key: &str) -> String {
    lookup(language, key)
        .or_else(|| lookup("en", key))
        .map(str::to_string)
        .unwrap_or_else(|| key.to_string())
}

fn lookup(language: &str, key: &str) -> Option<&'static str> {
    match language {
        "en" => en(key),
        "ar" => ar(key),
        "fr" => fr(key),
        "es" => es(key),
        "nl" => nl(key),
        "zh" => zh(key),
        _ => None,
    }
}

fn en(key: &str) -> Option<&'static str> {
    Some(match key {
        "chats" => "Chats",
        "newChat" => "New Chat",
        "recentConversations" => "RECENT CONVERSATIONS",
        "share" => "Share",
        "delete" => "Delete",
        "copy" => "Copy",
        "regenerate" => "Regenerate",
        "showAll" => "Show all",
        "showLess" => "Show less",
        "pin" => "Pin conversation",
        "unpin" => "Unpin conversation",
        "pinned" => "PINNED",
        "rename" => "Rename",
        "askMeAnything" => "Ask me anything about university applications...",
        "generatingAnswer" => "Generating answer...",
        "send" => "Send",
        "disclaimer" => "Aria might provide inaccurate information.",
        "verifyDetails" => "Always verify critical details.",
        "attachFile" => "Attach file",
        "fileUploadError" => "Error uploading file. Please try again.",
        "fileReceived" => "I've received your file: ",
        "upload" => "Upload",
        "uploading" => "Uploading...",
        "cancel" => "Cancel",
        "selectLanguage" => "Select Language",
        "languageDescription" => {
            "Choose your preferred language to start exploring university programs with Aria"
        }
        "welcomeToAria" => "Welcome to Aria",
        "welcomeDescription" => {
            "Your personal assistant for university applications. Please select your preferred language to continue."
        }
        "welcomeMessage" => {
            "Hi! I'm Aria, your university application assistant. How can I help you today?"
        }
        "shareConversation" => "Share Conversation",
        "copyLink" => "Copy Link",
        "linkCopied" => "Link copied to clipboard!",
        "publicAccess" => "Anyone with this link can view this conversation",
        "changeLanguage" => "Change Language",
        "search" => "Search universities and programs...",
        "noSearchResults" => "No conversations found",
        "historyWarning" => "Failed to save chat history. Local storage might be full.",
        _ => return None,
    })
}

fn ar(key: &str) -> Option<&'static str> {
    Some(match key {
        "chats" => "المحادثات",
        "newChat" => "محادثة جديدة",
        "recentConversations" => "المحادثات الأخيرة",
        "share" => "مشاركة",
        "delete" => "حذف",
        "copy" => "نسخ",
        "regenerate" => "إعادة إنشاء",
        "showAll" => "عرض الكل",
        "showLess" => "عرض أقل",
        "pin" => "تثبيت المحادثة",
        "unpin" => "إلغاء تثبيت المحادثة",
        "pinned" => "مثبت",
        "rename" => "إعادة تسمية",
        "askMeAnything" => "اسألني أي شيء عن طلبات الجامعة...",
        "generatingAnswer" => "جاري إنشاء الإجابة...",
        "send" => "إرسال",
        "disclaimer" => "قد تقدم آريا معلومات غير دقيقة.",
        "verifyDetails" => "تحقق دائمًا من التفاصيل المهمة.",
        "attachFile" => "إرفاق ملف",
        "fileUploadError" => "خطأ في تحميل الملف. يرجى المحاولة مرة أخرى.",
        "fileReceived" => "لقد استلمت ملفك: ",
        "upload" => "تحميل",
        "uploading" => "جاري التحميل...",
        "cancel" => "إلغاء",
        "selectLanguage" => "اختر اللغة",
        "languageDescription" => "اختر لغتك المفضلة للبدء في استكشاف برامج الجامعات مع آريا",
        "welcomeToAria" => "مرحبًا بك في آريا",
        "welcomeDescription" => "مساعدك الشخصي لطلبات الجامعة. يرجى اختيار لغتك المفضلة للمتابعة.",
        "welcomeMessage" => "مرحبًا! أنا آريا، مساعدتك لطلبات الجامعة. كيف يمكنني مساعدتك اليوم؟",
        "shareConversation" => "مشاركة المحادثة",
        "copyLink" => "نسخ الرابط",
        "linkCopied" => "تم نسخ الرابط إلى الحافظة!",
        "publicAccess" => "يمكن لأي شخص لديه هذا الرابط مشاهدة هذه المحادثة",
        "changeLanguage" => "تغيير اللغة",
        "search" => "البحث عن الجامعات والبرامج...",
        "noSearchResults" => "لم يتم العثور على محادثات",
        _ => return None,
    })
}

fn fr(key: &str) -> Option<&'static str> {
    Some(match key {
        "chats" => "Discussions",
        "newChat" => "Nouvelle Discussion",
        "recentConversations" => "CONVERSATIONS RÉCENTES",
        "share" => "Partager",
        "delete" => "Supprimer",
        "copy" => "Copier",
        "regenerate" => "Régénérer",
        "showAll" => "Afficher tout",
        "showLess" => "Afficher moins",
        "pin" => "Épingler la conversation",
        "unpin" => "Désépingler la conversation",
        "pinned" => "ÉPINGLÉ",
        "rename" => "Renommer",
        "askMeAnything" => "Demandez-moi n'importe quoi sur les candidatures universitaires...",
        "generatingAnswer" => "Génération de la réponse...",
        "send" => "Envoyer",
        "disclaimer" => "Aria peut fournir des informations inexactes.",
        "verifyDetails" => "Vérifiez toujours les détails critiques.",
        "attachFile" => "Joindre un fichier",
        "fileUploadError" => "Erreur lors du téléchargement du fichier. Veuillez réessayer.",
        "fileReceived" => "J'ai reçu votre fichier: ",
        "upload" => "Télécharger",
        "uploading" => "Téléchargement...",
        "cancel" => "Annuler",
        "selectLanguage" => "Sélectionner la Langue",
        "languageDescription" => {
            "Choisissez votre langue préférée pour commencer à explorer les programmes universitaires avec Aria"
        }
        "welcomeToAria" => "Bienvenue sur Aria",
        "welcomeDescription" => {
            "Votre assistant personnel pour les candidatures universitaires. Veuillez sélectionner votre langue préférée pour continuer."
        }
        "welcomeMessage" => {
            "Bonjour ! Je suis Aria, votre assistante pour les candidatures universitaires. Comment puis-je vous aider aujourd'hui ?"
        }
        "shareConversation" => "Partager la Conversation",
        "copyLink" => "Copier le Lien",
        "linkCopied" => "Lien copié dans le presse-papiers !",
        "publicAccess" => "Toute personne disposant de ce lien peut consulter cette conversation",
        "changeLanguage" => "Changer de Langue",
        "search" => "Rechercher des universités et des programmes...",
        "noSearchResults" => "Aucune conversation trouvée",
        _ => return None,
    })
}

fn es(key: &str) -> Option<&'static str> {
    Some(match key {
        "chats" => "Chats",
        "newChat" => "Nuevo Chat",
        "recentConversations" => "CONVERSACIONES RECIENTES",
        "share" => "Compartir",
        "delete" => "Eliminar",
        "copy" => "Copiar",
        "regenerate" => "Regenerar",
        "showAll" => "Mostrar todo",
        "showLess" => "Mostrar menos",
        "pin" => "Fijar conversación",
        "unpin" => "Desfijar conversación",
        "pinned" => "FIJADO",
        "rename" => "Renombrar",
        "askMeAnything" => "Pregúntame cualquier cosa sobre solicitudes universitarias...",
        "generatingAnswer" => "Generando respuesta...",
        "send" => "Enviar",
        "disclaimer" => "Aria podría proporcionar información inexacta.",
        "verifyDetails" => "Siempre verifica los detalles críticos.",
        "attachFile" => "Adjuntar archivo",
        "fileUploadError" => "Error al subir el archivo. Por favor, inténtalo de nuevo.",
        "fileReceived" => "He recibido tu archivo: ",
        "upload" => "Subir",
        "uploading" => "Subiendo...",
        "cancel" => "Cancelar",
        "selectLanguage" => "Seleccionar Idioma",
        "languageDescription" => {
            "Elige tu idioma preferido para comenzar a explorar programas universitarios con Aria"
        }
        "welcomeToAria" => "Bienvenido a Aria",
        "welcomeDescription" => {
            "Tu asistente personal para solicitudes universitarias. Por favor, selecciona tu idioma preferido para continuar."
        }
        "welcomeMessage" => {
            "¡Hola! Soy Aria, tu asistente para solicitudes universitarias. ¿Cómo puedo ayudarte hoy?"
        }
        "shareConversation" => "Compartir Conversación",
        "copyLink" => "Copiar Enlace",
        "linkCopied" => "¡Enlace copiado al portapapeles!",
        "publicAccess" => "Cualquier persona con este enlace puede ver esta conversación",
        "changeLanguage" => "Cambiar Idioma",
        "search" => "Buscar universidades y programas...",
        "noSearchResults" => "No se encontraron conversaciones",
        _ => return None,
    })
}

fn nl(key: &str) -> Option<&'static str> {
    Some(match key {
        "chats" => "Gesprekken",
        "newChat" => "Nieuw Gesprek",
        "recentConversations" => "RECENTE GESPREKKEN",
        "share" => "Delen",
        "delete" => "Verwijderen",
        "copy" => "Kopiëren",
        "regenerate" => "Opnieuw genereren",
        "showAll" => "Alles tonen",
        "showLess" => "Minder tonen",
        "pin" => "Gesprek vastmaken",
        "unpin" => "Gesprek losmaken",
        "pinned" => "VASTGEMAAKT",
        "rename" => "Hernoemen",
        "askMeAnything" => "Vraag me alles over universitaire aanmeldingen...",
        "generatingAnswer" => "Antwoord genereren...",
        "send" => "Versturen",
        "disclaimer" => "Aria kan onnauwkeurige informatie geven.",
        "verifyDetails" => "Verifieer altijd kritieke details.",
        "attachFile" => "Bestand bijvoegen",
        "fileUploadError" => "Fout bij uploaden bestand. Probeer het opnieuw.",
        "fileReceived" => "Ik heb je bestand ontvangen: ",
        "upload" => "Uploaden",
        "uploading" => "Uploaden...",
        "cancel" => "Annuleren",
        "selectLanguage" => "Selecteer Taal",
        "languageDescription" => {
            "Kies je voorkeurstaal om universiteitsprogramma's te verkennen met Aria"
        }
        "welcomeToAria" => "Welkom bij Aria",
        "welcomeDescription" => {
            "Je persoonlijke assistent voor universitaire aanmeldingen. Selecteer je voorkeurstaal om door te gaan."
        }
        "welcomeMessage" => {
            "Hoi! Ik ben Aria, je assistent voor universitaire aanmeldingen. Hoe kan ik je vandaag helpen?"
        }
        "shareConversation" => "Gesprek Delen",
        "copyLink" => "Link Kopiëren",
        "linkCopied" => "Link gekopieerd naar klembord!",
        "publicAccess" => "Iedereen met deze link kan dit gesprek bekijken",
        "changeLanguage" => "Taal Wijzigen",
        "search" => "Zoek universiteiten en programma's...",
        "noSearchResults" => "Geen gesprekken gevonden",
        _ => return None,
    })
}

fn zh(key: &str) -> Option<&'static str> {
    Some(match key {
        "chats" => "聊天",
        "newChat" => "新聊天",
        "recentConversations" => "最近对话",
        "share" => "分享",
        "delete" => "删除",
        "copy" => "复制",
        "regenerate" => "重新生成",
        "showAll" => "显示全部",
        "showLess" => "显示更少",
        "pin" => "置顶对话",
        "unpin" => "取消置顶",
        "pinned" => "已置顶",
        "rename" => "重命名",
        "askMeAnything" => "关于大学申请，问我任何问题...",
        "generatingAnswer" => "正在生成回答...",
        "send" => "发送",
        "disclaimer" => "Aria可能提供不准确的信息。",
        "verifyDetails" => "请始终验证重要细节。",
        "attachFile" => "附加文件",
        "fileUploadError" => "上传文件时出错。请重试。",
        "fileReceived" => "我已收到您的文件：",
        "upload" => "上传",
        "uploading" => "上传中...",
        "cancel" => "取消",
        "selectLanguage" => "选择语言",
        "languageDescription" => "选择您的首选语言，开始与Aria一起探索大学课程",
        "welcomeToAria" => "欢迎使用Aria",
        "welcomeDescription" => "您的大学申请个人助手。请选择您的首选语言以继续。",
        "welcomeMessage" => "你好！我是Aria，您的大学申请助手。今天我能为您做些什么？",
        "shareConversation" => "分享对话",
        "copyLink" => "复制链接",
        "linkCopied" => "链接已复制到剪贴板！",
        "publicAccess" => "任何拥有此链接的人都可以查看此对话",
        "changeLanguage" => "更改语言",
        "search" => "搜索大学和专业...",
        "noSearchResults" => "未找到对话",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_supported_language_has_a_welcome_message() {
        for lang in supported_languages() {
            let welcome = translate(&lang.code, "welcomeMessage");
            assert_ne!(welcome, "welcomeMessage", "missing welcome for {}", lang.code);
        }
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        assert_eq!(translate("xx", "newChat"), "New Chat");
    }

    #[test]
    fn unknown_key_falls_back_to_the_key_itself() {
        assert_eq!(translate("en", "noSuchKey"), "noSuchKey");
    }

    #[test]
    fn missing_key_in_language_falls_back_to_english() {
        // historyWarning only exists in the English table
        assert_eq!(
            translate("fr", "historyWarning"),
            "Failed to save chat history. Local storage might be full."
        );
    }
}
