//! The pre-authored narrative strings. Static prose, not derived from the
//! dataset; edits here would desynchronize the stories from the numbers they
//! describe, so the text is kept byte-for-byte as originally authored.

use crate::charts::ChartKind;
use crate::data::Country;

pub const NO_STORY_FOR_CHART: &str = "No story available for this chart type.";
pub const NO_STORY_FOR_COUNTRY: &str = "No story available for this country.";

pub const ABOUT_TEXT: &str = " Life Expectancy Dashboard\n\n\
This dashboard visualizes life expectancy and Healthy Life Expectancy (HALE) metrics across various countries and years. The data provided helps analyze health trends and the quality of life in different regions.\n\n\
Metrics:\n\
*Life Expectancy at Birth: The average number of years a newborn is expected to live if current mortality rates persist throughout their lifetime.\n\
*Life Expectancy at Age 60: The average number of additional years a person who has reached age 60 is expected to live.\n\
*Healthy Life Expectancy (HALE) at Birth: The number of years a newborn is expected to live in good health.\n\
*Healthy Life Expectancy (HALE) at Age 60: The number of additional years a person aged 60 is expected to live in good health.\n\n\
Use the buttons and charts to explore different aspects of the life expectancy and HALE data to gain insights into health trends globally.";

pub(super) fn country_story(country: Country, kind: ChartKind) -> &'static str {
    match country {
        Country::Australia => match kind {
            ChartKind::Bar => "The bar chart for Australia demonstrates a gradual increase in life expectancy at birth from 81.9 years in 2010 to 83 years in 2019, indicating improved overall longevity. Life expectancy at age 60 also shows an upward trend, moving from 24.7 years in 2010 to 25.6 years in 2019, suggesting that Australians are living longer even in their senior years. Healthy Life Expectancy (HALE) at birth rose from 70.2 years to 70.9 years, reflecting an increase in the years Australians spend in good health. At the same time, HALE at age 60 increased from 18.4 years to 19 years, highlighting a slight but significant improvement in the health quality of the elderly population.",
            ChartKind::Line => "The line chart for Australia shows a clear positive trend in life expectancy at birth, which increased from 81.9 years in 2010 to 83 years in 2019. This trend underscores Australia's progress in extending lifespan. Life expectancy at age 60 also shows a consistent rise from 24.7 years to 25.6 years, indicating enhanced quality of life for older Australians. The increase in HALE at birth from 70.2 years to 70.9 years and the rise in HALE at age 60 from 18.4 years to 19 years suggest improvements in health standards, contributing to better overall health outcomes.",
            ChartKind::Pie => "The pie chart for Australia in 2019 illustrates that the highest value is life expectancy at birth, standing at 83 years, indicating a robust lifespan. HALE at birth is substantial at 70.9 years, suggesting that most of these years are spent in good health. Life expectancy at age 60 is 25.6 years, and HALE at age 60 is 19 years, showing that Australians maintain a good quality of life well into their senior years. This distribution reflects Australia's strong health care system and high standards of living.",
            ChartKind::Scatter => "The scatter plot for Australia displays a positive trajectory in both life expectancy and HALE metrics. Life expectancy at birth has steadily increased from 81.9 years in 2010 to 83 years in 2019. Similarly, HALE at birth has risen from 70.2 years to 70.9 years, while HALE at age 60 has grown from 18.4 years to 19 years. This data illustrates the steady improvement in both lifespan and health quality, showcasing Australia\u{2019}s continued progress in public health.",
        },
        Country::China => match kind {
            ChartKind::Bar => "The bar chart for China reveals an increase in life expectancy at birth from 74.9 years in 2010 to 77.4 years in 2019. This rise signifies substantial improvements in longevity. However, life expectancy at age 60 shows a more modest increase from 19.6 years to 21.1 years, suggesting a slower improvement in the later stages of life. Healthy Life Expectancy (HALE) at birth improved from 66.7 years to 68.5 years, indicating that the additional years of life are increasingly spent in good health. HALE at age 60 also increased from 14.9 years to 15.9 years, reflecting improvements in health among the elderly.",
            ChartKind::Line => "The line chart for China illustrates a steady increase in life expectancy at birth from 74.9 years in 2010 to 77.4 years in 2019. Life expectancy at age 60 also shows an upward trend, from 19.6 years to 21.1 years, suggesting improved quality of life for older adults. HALE at birth rose from 66.7 years to 68.5 years, and HALE at age 60 increased from 14.9 years to 15.9 years, reflecting overall health improvements and increased longevity.",
            ChartKind::Pie => " In the pie chart for China, the largest segment represents life expectancy at birth, which is 77.4 years in 2019. HALE at birth is 68.5 years, indicating that a significant portion of life expectancy is spent in good health. Life expectancy at age 60 is 21.1 years, and HALE at age 60 is 15.9 years. This distribution highlights the gains in longevity and health quality, showing that while life expectancy has increased, the quality of health in old age has also improved.",
            ChartKind::Scatter => "The scatter plot for China shows a clear upward trend in both life expectancy and HALE metrics. Life expectancy at birth increased from 74.9 years in 2010 to 77.4 years in 2019. HALE at birth also improved from 66.7 years to 68.5 years, and HALE at age 60 rose from 14.9 years to 15.9 years. This data illustrates the progress China has made in both extending lifespan and improving health outcomes.",
        },
        Country::India => match kind {
            ChartKind::Bar => "The bar chart for India demonstrates an increase in life expectancy at birth from 67.2 years in 2010 to 70.8 years in 2019, reflecting significant gains in longevity. Life expectancy at age 60 also increased from 18 years to 18.8 years. Healthy Life Expectancy (HALE) at birth rose from 57.3 years to 60.3 years, indicating that more of these years are spent in good health. HALE at age 60 improved from 12.6 years to 13.2 years, showing enhanced health conditions among the elderly.",
            ChartKind::Line => "The line chart for India reveals a consistent upward trend in life expectancy at birth, which grew from 67.2 years in 2010 to 70.8 years in 2019. Life expectancy at age 60 also saw an increase from 18 years to 18.8 years. HALE at birth improved from 57.3 years to 60.3 years, while HALE at age 60 rose from 12.6 years to 13.2 years, reflecting ongoing improvements in health and longevity.",
            ChartKind::Pie => "The pie chart for India highlights that life expectancy at birth in 2019 is the highest at 70.8 years, with HALE at birth at 60.3 years. Life expectancy at age 60 stands at 18.8 years, and HALE at age 60 is 13.2 years. This distribution illustrates India's progress in extending lifespan and improving health, particularly among the elderly population.",
            ChartKind::Scatter => " The scatter plot for India shows an upward trend in life expectancy and HALE metrics. Life expectancy at birth increased from 67.2 years in 2010 to 70.8 years in 2019. HALE at birth also rose from 57.3 years to 60.3 years, while HALE at age 60 improved from 12.6 years to 13.2 years. This indicates a general enhancement in health and longevity over the years.",
        },
        Country::UnitedStates => match kind {
            ChartKind::Bar => "The bar chart for the USA highlights high life expectancy at birth and at age 60, though disparities in HALE suggest areas for improvement in healthcare equity.",
            ChartKind::Line => "The line chart for the USA depicts stable life expectancy trends, with recent years showing slight improvements in HALE, reflecting ongoing healthcare advancements.",
            ChartKind::Pie => "In the USA's pie chart, life expectancy at birth occupies a major portion, showcasing the country's high standard of living and healthcare facilities.",
            ChartKind::Scatter => "The scatter plot for the USA illustrates a consistent trend of high life expectancy and HALE, demonstrating the effectiveness of the nation's health policies.",
        },
    }
}

pub(super) fn all_countries_story(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Bar => "The bar chart compares life expectancy and HALE metrics across different countries, illustrating variations in health outcomes and quality of life on a global scale.",
        ChartKind::Line => "The line chart showcases trends in life expectancy and HALE for multiple countries, highlighting how different nations have improved over time.",
        ChartKind::Pie => "The pie chart presents the distribution of life expectancy and HALE metrics among various countries, providing a visual comparison of health standards worldwide.",
        ChartKind::Scatter => "The scatter plot demonstrates the relationship between life expectancy and HALE across countries, revealing patterns and disparities in global health data.",
    }
}
