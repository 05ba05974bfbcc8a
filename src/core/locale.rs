//! User-facing wording in English and Arabic.
//!
//! Arabic strings follow the wording of the college's web dashboard.

use std::fmt;
use std::str::FromStr;

/// Supported display languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    /// English, left-to-right
    #[default]
    En,
    /// Arabic, right-to-left
    Ar,
}

impl Locale {
    /// Labels for this locale
    #[must_use]
    pub const fn labels(self) -> &'static Labels {
        match self {
            Self::En => &EN,
            Self::Ar => &AR,
        }
    }

    /// BCP 47 language tag
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// HTML text direction
    #[must_use]
    pub const fn direction(self) -> &'static str {
        match self {
            Self::En => "ltr",
            Self::Ar => "rtl",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "ar" | "arabic" => Ok(Self::Ar),
            _ => Err(format!("Unknown locale: {s}")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Every piece of translatable text used by notices and reports
#[derive(Debug)]
pub struct Labels {
    /// Shown after a successful import
    pub import_success: &'static str,
    /// Shown when an imported file has the wrong structure
    pub invalid_format: &'static str,
    /// Shown when an imported file cannot be read or parsed
    pub read_failure: &'static str,
    /// Overview page title
    pub dashboard_title: &'static str,
    /// Overview page subtitle
    pub dashboard_subtitle: &'static str,
    /// Summary card: total students
    pub total_students: &'static str,
    /// Summary card: faculty
    pub faculty_body: &'static str,
    /// Summary card: PhD holders
    pub phd_holders: &'static str,
    /// Summary card: students per PhD holder
    pub students_per_phd: &'static str,
    /// Prefix for the PhD share under the PhD card
    pub share: &'static str,
    /// Trend table heading
    pub growth_heading: &'static str,
    /// Gender table heading
    pub gender_heading: &'static str,
    /// Column: academic year
    pub academic_year: &'static str,
    /// Column: students
    pub students: &'static str,
    /// Column: faculty (trend series)
    pub teachers: &'static str,
    /// Column: male
    pub male: &'static str,
    /// Column: female
    pub female: &'static str,
    /// Column: total
    pub total: &'static str,
    /// Per-year report title prefix
    pub year_report_title: &'static str,
    /// Issuing unit shown under the year report title
    pub issuing_unit: &'static str,
    /// Faculty members section heading
    pub faculty_members: &'static str,
    /// PhD count label in the faculty section
    pub phd: &'static str,
    /// PhD share label in the faculty section
    pub phd_share: &'static str,
    /// Ratio label: students per faculty member
    pub student_per_faculty: &'static str,
    /// Ratio label: students per PhD holder
    pub student_per_doctor: &'static str,
    /// Student distribution caption
    pub student_distribution: &'static str,
    /// Footer: print date
    pub printed_on: &'static str,
    /// Footer: system name
    pub system_name: &'static str,
    /// Shown when there is no data to summarize
    pub no_data: &'static str,
}

const EN: Labels = Labels {
    import_success: "Data imported successfully",
    invalid_format: "Invalid file format",
    read_failure: "An error occurred while reading the file",
    dashboard_title: "Main Dashboard",
    dashboard_subtitle: "Performance summary and indicators for all academic years",
    total_students: "Total Students",
    faculty_body: "Faculty",
    phd_holders: "PhD Holders",
    students_per_phd: "Students per PhD",
    share: "Share",
    growth_heading: "Student and Faculty Growth",
    gender_heading: "Students by Gender",
    academic_year: "Academic Year",
    students: "Students",
    teachers: "Faculty",
    male: "Male",
    female: "Female",
    total: "Total",
    year_report_title: "Academic Year Report",
    issuing_unit: "Educational Affairs Unit",
    faculty_members: "Faculty Members",
    phd: "PhD",
    phd_share: "PhD Holders Share",
    student_per_faculty: "Students per Faculty",
    student_per_doctor: "Students per PhD",
    student_distribution: "Student Distribution",
    printed_on: "Printed on",
    system_name: "Academic Statistics System",
    no_data: "No academic years loaded",
};

const AR: Labels = Labels {
    import_success: "تم استيراد البيانات بنجاح",
    invalid_format: "تنسيق الملف غير صالح",
    read_failure: "حدث خطأ أثناء قراءة الملف",
    dashboard_title: "لوحة المعلومات الرئيسية",
    dashboard_subtitle: "ملخص الأداء والمؤشرات لجميع الأعوام الدراسية",
    total_students: "إجمالي الطلاب",
    faculty_body: "هيئة التدريس",
    phd_holders: "حملة الدكتوراه",
    students_per_phd: "معدل الطلاب للدكتور",
    share: "نسبة",
    growth_heading: "تطور أعداد الطلاب والأساتذة",
    gender_heading: "توزيع الطلاب حسب الجنس",
    academic_year: "العام الدراسي",
    students: "الطلاب",
    teachers: "الأساتذة",
    male: "ذكور",
    female: "إناث",
    total: "الإجمالي",
    year_report_title: "تقرير العام الأكاديمي",
    issuing_unit: "وحدة الشؤون التعليمية",
    faculty_members: "أعضاء هيئة التدريس",
    phd: "دكتوراه",
    phd_share: "نسبة حملة الدكتوراه",
    student_per_faculty: "طالب لكل أستاذ",
    student_per_doctor: "طالب لكل دكتور",
    student_distribution: "توزيع الطلاب",
    printed_on: "تاريخ الطباعة",
    system_name: "نظام الإحصائيات الأكاديمي",
    no_data: "لا توجد بيانات",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_tags() {
        assert_eq!("AR".parse::<Locale>(), Ok(Locale::Ar));
        assert_eq!("english".parse::<Locale>(), Ok(Locale::En));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn arabic_is_right_to_left() {
        assert_eq!(Locale::Ar.direction(), "rtl");
        assert_eq!(Locale::En.direction(), "ltr");
    }

    #[test]
    fn labels_differ_per_locale() {
        assert_ne!(
            Locale::En.labels().import_success,
            Locale::Ar.labels().import_success
        );
    }
}
