//! Canned reply texts. Content, not logic — the dispatcher maps menu
//! labels onto these verbatim.

/// Welcome message for `/start`, personalized with the sender's name.
pub fn welcome_text(first_name: &str) -> String {
    format!(
        "ሰላም {first_name}! 👋\n\n\
         ወደ ነጻነት ጉዞ እንኳን በደህና መጡ። \
         ይህ ቦት ከፖርኖግራፊ ሱስ ለመውጣት በሚያደርጉት ጉዞ አጋዥ እንዲሆን ታስቦ የተዘጋጀ ነው።\n\n\
         ከታች ካሉት አማራጮች ይምረጡ 👇"
    )
}

/// Emergency coping steps. The only reply sent with a parse mode.
pub const SOS_TEXT: &str = "🚨 **ረጋ በል!** ስሜቱ ጊዜያዊ ነው።\n\n\
    1. ስልክህን አሁን አስቀምጥና ከክፍሉ ውጣ።\n\
    2. ቀዝቃዛ ውሃ ፊትህን ታጠብ።\n\
    3. ለጓደኛህ ወይም ለቤተሰብ ደውል አውራ።\n\
    4. 10 ጊዜ በጥልቀት ተንፍስ።\n\n\
    ይህን ስሜት ማሸነፍ ትችላለህ! 💪";

pub const TIPS_TEXT: &str = "✅ **ሱስን ለማሸነፍ የሚረዱ ዘዴዎች፡**\n\n\
    1. **ቀስቃሽ ነገሮችን አስወግድ:** እንደ TikTok, Instagram ወይም Telegram ቻናሎችን አጽዳ።\n\
    2. **ጊዜህን ሙላ:** ስፖርት ስራ፣ መጽሐፍ አንብብ።\n\
    3. **ብቻህን አትሁን:** በር ክፍት አድርገህ ተቀመጥ።";

pub const STORIES_TEXT: &str = "አንድ ወጣት እንዲህ ይላል፡\n\
    'ለ5 ዓመታት በዚህ ሱስ ተይዤ ነበር። ነገር ግን ስልኬን ማታ ወደ መኝታ አለማስገባት ስጀምርና \
    ለጓደኛዬ ችግሬን ነግሬ እርዳታ ስጠይቅ ቀስ በቀስ ነጻ ወጣሁ።'";

pub const RESOURCES_TEXT: &str = "በቅርቡ እዚህ ጋር ጠቃሚ መጽሐፍት እና የድምጽ ፋይሎች ይጫናሉ!";

pub const ASK_TEXT: &str = "ጥያቄ ካለዎት በዚህ አድራሻ ያናግሩን፡ @YourAdminUsername";

pub const ABOUT_TEXT: &str = "ይህ ቦት የተሰራው ወጣቶችን ለመርዳት በጎ ፈቃደኞች ነው።";
